use super::*;

#[test]
fn user_message_passes_through_validation_and_auth_text() {
    assert_eq!(AuthError::Validation("Enter full OTP").user_message(), "Enter full OTP");
    assert_eq!(
        AuthError::Authentication("Invalid email or password".to_owned()).user_message(),
        "Invalid email or password"
    );
}

#[test]
fn user_message_hides_transport_details() {
    let err = AuthError::from(TransportError::Status {
        status: 502,
        message: "<html>bad gateway</html>".to_owned(),
    });
    assert_eq!(err.user_message(), RETRY_MESSAGE);
    assert_eq!(err.to_string(), "request failed (502): <html>bad gateway</html>");
}
