//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-256 with a pure-Rust implementation.

pub mod sha256;

pub use sha256::SHA256_DIGEST_LEN;

/// Re-export of the SHA-256 convenience functions.
pub use sha256::core::{sha256, sha256_hex};
