//! URL-safe Base64 without padding
//!
//! The standard Base64 alphabet with `+` replaced by `-` and `/` replaced
//! by `_`. Encoded text never contains `=`: the length of the final
//! partial group (2 or 3 characters) carries the number of trailing bytes.
//!
//! | input bytes mod 3 | trailing characters |
//! |-------------------|---------------------|
//! | 0                 | 0                   |
//! | 1                 | 2                   |
//! | 2                 | 3                   |
//!
//! A text length that is 1 mod 4 cannot be produced by any input and is
//! rejected by the decoder.

pub mod core;

pub use self::core::{Base64UrlError, decode, encode};

/// The 64-character URL-safe alphabet, indexed by 6-bit value.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Marker for bytes outside the alphabet in [`DECODE_TABLE`].
pub(crate) const INVALID: u8 = 0xFF;

/// Reverse lookup from input byte to 6-bit value, or [`INVALID`].
pub(crate) const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;

    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }

    table
}

/// Number of characters produced when encoding `n` bytes.
pub const fn encoded_len(n: usize) -> usize {
    let tail = match n % 3 {
        0 => 0,
        1 => 2,
        _ => 3,
    };

    n / 3 * 4 + tail
}

/// Number of bytes a text of `len` characters decodes to.
///
/// Returns `None` when `len % 4 == 1`, which no encoding can produce.
pub const fn decoded_len(len: usize) -> Option<usize> {
    let tail = match len % 4 {
        0 => 0,
        1 => return None,
        2 => 1,
        _ => 2,
    };

    Some(len / 4 * 3 + tail)
}
