//! URL-safe Base64 encoder and decoder.

use log::debug;
use thiserror::Error;

use super::{ALPHABET, DECODE_TABLE, INVALID, decoded_len, encoded_len};

/// Errors returned by [`decode`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base64UrlError {
    /// The text contains a character outside the URL-safe alphabet, or its
    /// length is 1 mod 4.
    #[error("invalid URL-safe base64 encoding")]
    InvalidEncoding,
}

#[inline(always)]
fn sextet(value: u32, shift: u32) -> char {
    ALPHABET[((value >> shift) & 0x3f) as usize] as char
}

/// Encodes `input` as URL-safe Base64 without padding.
///
/// Never fails. The output only contains `[A-Za-z0-9-_]`.
pub fn encode(input: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(input.len()));

    let groups = input.chunks_exact(3);
    let tail = groups.remainder();

    for group in groups {
        let v = u32::from(group[0]) << 16 | u32::from(group[1]) << 8 | u32::from(group[2]);

        out.push(sextet(v, 18));
        out.push(sextet(v, 12));
        out.push(sextet(v, 6));
        out.push(sextet(v, 0));
    }

    // Missing low bytes are zero-extended; the characters they would
    // have produced are dropped instead of padded.
    match *tail {
        [a] => {
            let v = u32::from(a) << 16;
            out.push(sextet(v, 18));
            out.push(sextet(v, 12));
        }
        [a, b] => {
            let v = u32::from(a) << 16 | u32::from(b) << 8;
            out.push(sextet(v, 18));
            out.push(sextet(v, 12));
            out.push(sextet(v, 6));
        }
        _ => {}
    }

    out
}

/// Packs up to four characters into a big-endian run of 6-bit values.
fn unpack(chars: &[u8], offset: usize) -> Result<u32, Base64UrlError> {
    chars.iter().enumerate().try_fold(0u32, |acc, (i, &c)| {
        let v = DECODE_TABLE[c as usize];

        if v == INVALID {
            debug!(
                "rejecting base64url text: byte {:#04x} at offset {} is outside the alphabet",
                c,
                offset + i
            );
            return Err(Base64UrlError::InvalidEncoding);
        }

        Ok(acc << 6 | u32::from(v))
    })
}

/// Decodes URL-safe, unpadded Base64 text.
///
/// # Errors
///
/// Returns [`Base64UrlError::InvalidEncoding`] if `text` contains any
/// character outside the URL-safe alphabet (`+`, `/` and `=` included),
/// or if its length is 1 mod 4. Nothing is returned on failure.
///
/// Unused low bits of a final partial group are ignored.
pub fn decode(text: &str) -> Result<Vec<u8>, Base64UrlError> {
    let input = text.as_bytes();

    let Some(len) = decoded_len(input.len()) else {
        debug!(
            "rejecting base64url text: length {} is 1 mod 4",
            input.len()
        );
        return Err(Base64UrlError::InvalidEncoding);
    };

    let mut out = Vec::with_capacity(len);

    let groups = input.chunks_exact(4);
    let tail = groups.remainder();

    for (n, group) in groups.enumerate() {
        let v = unpack(group, n * 4)?;
        out.extend_from_slice(&[(v >> 16) as u8, (v >> 8) as u8, v as u8]);
    }

    if !tail.is_empty() {
        // Realign the 12 or 18 decoded bits to the top of a 24-bit group
        let v = unpack(tail, input.len() - tail.len())? << (6 * (4 - tail.len()));
        let bytes = [(v >> 16) as u8, (v >> 8) as u8];

        out.extend_from_slice(&bytes[..tail.len() - 1]);
    }

    Ok(out)
}
