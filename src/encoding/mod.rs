//! Binary-to-text encodings.
//!
//! Currently includes URL-safe, unpadded Base64 (RFC 4648 §5).

pub mod base64url;

pub use base64url::{Base64UrlError, decode, encode};
