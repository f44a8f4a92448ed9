//! Local input checks applied before any network call.
//!
//! Only presence and shape are checked here; the server stays the authority
//! on email format, password rules and code correctness.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const CREDENTIALS_REQUIRED: &str = "Email and password are required.";
pub const EMAIL_REQUIRED: &str = "Enter your email address.";
pub const FIELDS_REQUIRED: &str = "All fields are required.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const OTP_INCOMPLETE: &str = "Enter full OTP";
pub const RESET_TOKEN_MISSING: &str = "This reset link is invalid or has expired.";

/// Number of digits in an email verification code.
pub const OTP_LEN: usize = 4;

/// Trimmed email plus the password exactly as typed.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(CREDENTIALS_REQUIRED);
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub fn validate_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    Ok(email.to_owned())
}

/// Accepts exactly [`OTP_LEN`] ASCII digits, nothing else.
pub fn validate_otp(code: &str) -> Result<&str, &'static str> {
    if code.len() == OTP_LEN && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(code)
    } else {
        Err(OTP_INCOMPLETE)
    }
}

pub fn validate_registration<'a>(
    name: &'a str,
    email: &'a str,
    password: &'a str,
    confirm_password: &str,
) -> Result<(&'a str, &'a str, &'a str), &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(FIELDS_REQUIRED);
    }
    if password != confirm_password {
        return Err(PASSWORD_MISMATCH);
    }
    Ok((name, email, password))
}

pub fn validate_password_reset<'a>(
    token: &'a str,
    password: &'a str,
    confirm_password: &str,
) -> Result<(&'a str, &'a str), &'static str> {
    let token = token.trim();
    if token.is_empty() {
        return Err(RESET_TOKEN_MISSING);
    }
    if password.is_empty() {
        return Err(FIELDS_REQUIRED);
    }
    if password != confirm_password {
        return Err(PASSWORD_MISMATCH);
    }
    Ok((token, password))
}
