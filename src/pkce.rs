//! OAuth 2.0 PKCE code challenge (RFC 7636).
//!
//! The `S256` method derives the challenge sent with an authorization
//! request from the client's secret code verifier:
//!
//! ```text
//! code_challenge = BASE64URL-ENCODE(SHA256(ASCII(code_verifier)))
//! ```
//!
//! Verifier generation is left to the caller.

use crate::encoding::base64url::encode;
use crate::hash::sha256;

/// Value of the `code_challenge_method` parameter for [`code_challenge`].
pub const CODE_CHALLENGE_METHOD: &str = "S256";

/// Length of every `S256` challenge: 32 digest bytes, unpadded.
pub const CODE_CHALLENGE_LEN: usize = 43;

/// Derives the `S256` code challenge for `verifier`.
///
/// # Example
///
/// ```
/// use cryptal_digest::pkce::code_challenge;
///
/// assert_eq!(
///     code_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk"),
///     "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM",
/// );
/// ```
pub fn code_challenge(verifier: &str) -> String {
    encode(&sha256(verifier.as_bytes()))
}
