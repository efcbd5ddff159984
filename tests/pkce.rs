use cryptal_digest::pkce::{CODE_CHALLENGE_LEN, CODE_CHALLENGE_METHOD, code_challenge};
use cryptal_digest::{decode, sha256};

#[test]
fn rfc7636_appendix_b_vector() {
    assert_eq!(
        code_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk"),
        "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
    );
}

#[test]
fn method_is_s256() {
    assert_eq!(CODE_CHALLENGE_METHOD, "S256");
}

#[test]
fn challenge_has_fixed_length() {
    for verifier in ["", "a", "0123456789abcdefghijklmnopqrstuvwxyz-._~0123456789abcdefghij"] {
        assert_eq!(code_challenge(verifier).len(), CODE_CHALLENGE_LEN);
    }
}

#[test]
fn challenge_decodes_to_verifier_digest() {
    let verifier = "nebula-verifier";
    let challenge = code_challenge(verifier);

    assert_eq!(decode(&challenge).unwrap(), sha256(verifier.as_bytes()));
}
