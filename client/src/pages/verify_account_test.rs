use super::*;

#[test]
fn validate_verification_pairs_user_and_code() {
    assert_eq!(
        validate_verification(Some("u-1".to_owned()), " 4821 "),
        Ok(VerifyRequest { user_id: "u-1".to_owned(), auth_code: "4821".to_owned() })
    );
}

#[test]
fn validate_verification_requires_known_user() {
    assert_eq!(
        validate_verification(None, "4821"),
        Err("Sign up first so we know which account to verify.")
    );
}

#[test]
fn validate_verification_requires_code() {
    assert_eq!(validate_verification(Some("u-1".to_owned()), "   "), Err("Enter the verification code."));
    assert_eq!(
        validate_verification(Some("u-1".to_owned()), "12345678901"),
        Err("Enter the verification code.")
    );
}
