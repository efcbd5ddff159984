//! SHA-256 core hashing functions
//!
//! It provides:
//! - the compression function operating on 512-bit blocks
//! - a complete SHA-256 hashing function for arbitrary-length input
//! - a lowercase hexadecimal rendering of the digest
//!
//! No heap allocations are performed by `compress` or `sha256`.

use super::computations::all_rounds;
use super::{H256_INIT, SHA256_BLOCK_LEN, SHA256_DIGEST_LEN};

/// Decodes a 64-byte block into 16 big-endian words.
#[inline(always)]
fn load_words(block: &[u8]) -> [u32; 16] {
    let mut w = [0u32; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    w
}

/// Compresses a single 512-bit message block.
///
/// Updates `state` (8 × 32-bit words) in place.
#[inline(always)]
pub fn compress(block: &[u8; 64], state: &mut [u32; 8]) {
    all_rounds(state, load_words(block));
}

/// Computes the SHA-256 hash of the given input.
///
/// # Notes
/// - Message length is encoded as a 64-bit big-endian integer (in bits).
/// - The state is serialized big-endian into the 32-byte output.
/// - Every input, including the empty slice, is valid.
pub fn sha256(input: &[u8]) -> [u8; 32] {
    let mut state = H256_INIT;

    let blocks = input.chunks_exact(SHA256_BLOCK_LEN);
    let tail = blocks.remainder();

    for block in blocks {
        all_rounds(&mut state, load_words(block));
    }

    let mut block = [0u8; SHA256_BLOCK_LEN];
    let rem = tail.len();

    block[..rem].copy_from_slice(tail);
    block[rem] = 0x80;

    // No room left for the 8-byte length field
    if rem > 55 {
        compress(&block, &mut state);
        block = [0; SHA256_BLOCK_LEN];
    }

    let bit_len = (input.len() as u64) << 3;
    block[56..].copy_from_slice(&bit_len.to_be_bytes());

    compress(&block, &mut state);

    let mut out = [0u8; SHA256_DIGEST_LEN];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    out
}

/// Computes the SHA-256 hash of `input` as 64 lowercase hex characters.
///
/// This is the form used for content checksums in HTTP headers
/// (e.g. `Content-SHA256`).
pub fn sha256_hex(input: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let digest = sha256(input);
    let mut out = String::with_capacity(SHA256_DIGEST_LEN * 2);

    for byte in digest {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }

    out
}
