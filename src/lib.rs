//! Native SHA-256 and URL-safe Base64 for Nebula
//!
//! This crate provides two leaf primitives, implemented from scratch
//! rather than wrapped from a platform library, and the small
//! compositions built on top of them.
//!
//! # Module overview
//!
//! - `hash`  
//!   SHA-256 as defined in FIPS 180-4. One-shot only: the whole message
//!   is passed as a slice and a 32-byte digest is returned.
//!
//! - `encoding`  
//!   URL-safe Base64 without `=` padding (RFC 4648 §5). Encoding is
//!   total; decoding rejects text outside the alphabet and impossible
//!   lengths with a single error kind.
//!
//! - `pkce`  
//!   The OAuth 2.0 PKCE `S256` code challenge, i.e. the Base64url
//!   encoding of the SHA-256 digest of a code verifier.
//!
//! # Design goals
//!
//! - Pure functions: no global state, no hidden caching
//! - No heap allocations in the digest
//! - Bit-exact compatibility with the published standards
//!
//! # Example
//!
//! ```
//! use cryptal_digest::{decode, encode, sha256};
//!
//! let digest = sha256(b"abc");
//! let text = encode(&digest);
//!
//! assert_eq!(text, "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0");
//! assert_eq!(decode(&text).unwrap(), digest);
//! ```

pub mod encoding;
pub mod hash;
pub mod pkce;

pub use encoding::{Base64UrlError, decode, encode};
pub use hash::{SHA256_DIGEST_LEN, sha256, sha256_hex};
