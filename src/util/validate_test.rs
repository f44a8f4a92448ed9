use super::*;

#[test]
fn credentials_trim_email_but_keep_password() {
    assert_eq!(
        validate_credentials("  a@b.com ", " secret "),
        Ok(("a@b.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn credentials_require_both_fields() {
    assert_eq!(validate_credentials("", "secret"), Err(CREDENTIALS_REQUIRED));
    assert_eq!(validate_credentials("   ", "secret"), Err(CREDENTIALS_REQUIRED));
    assert_eq!(validate_credentials("a@b.com", ""), Err(CREDENTIALS_REQUIRED));
}

#[test]
fn email_is_trimmed_and_required() {
    assert_eq!(validate_email(" a@b.com "), Ok("a@b.com".to_owned()));
    assert_eq!(validate_email("  "), Err(EMAIL_REQUIRED));
}

#[test]
fn otp_accepts_exactly_four_digits() {
    assert_eq!(validate_otp("0429"), Ok("0429"));
}

#[test]
fn otp_rejects_wrong_length_or_non_digits() {
    for code in ["", "123", "12345", "12a4", " 123", "１２３４"] {
        assert_eq!(validate_otp(code), Err(OTP_INCOMPLETE), "code {code:?}");
    }
}

#[test]
fn registration_requires_fields_and_matching_confirmation() {
    assert_eq!(
        validate_registration(" Ann ", " a@b.com ", "pw", "pw"),
        Ok(("Ann", "a@b.com", "pw"))
    );
    assert_eq!(validate_registration("", "a@b.com", "pw", "pw"), Err(FIELDS_REQUIRED));
    assert_eq!(validate_registration("Ann", "a@b.com", "", ""), Err(FIELDS_REQUIRED));
    assert_eq!(validate_registration("Ann", "a@b.com", "pw", "pw2"), Err(PASSWORD_MISMATCH));
}

#[test]
fn password_reset_requires_token_first() {
    assert_eq!(validate_password_reset("  ", "pw", "pw"), Err(RESET_TOKEN_MISSING));
    assert_eq!(validate_password_reset("tok", "", ""), Err(FIELDS_REQUIRED));
    assert_eq!(validate_password_reset("tok", "pw", "px"), Err(PASSWORD_MISMATCH));
    assert_eq!(validate_password_reset(" tok ", "pw", "pw"), Ok(("tok", "pw")));
}
