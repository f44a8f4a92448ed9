use super::*;

// =============================================================
// ApiResponse
// =============================================================

#[test]
fn api_response_accepts_missing_data_and_message() {
    let resp: ApiResponse<UserData> = serde_json::from_str(r#"{"success":false}"#).expect("envelope");
    assert!(!resp.success);
    assert!(resp.data.is_none());
    assert!(resp.message.is_none());
}

#[test]
fn api_response_parses_user_payload() {
    let raw = r#"{
        "success": true,
        "data": { "user": { "id": "u-1", "email": "a@b.com", "role": "admin" } },
        "message": "Welcome back"
    }"#;
    let resp: ApiResponse<UserData> = serde_json::from_str(raw).expect("envelope");
    let user = resp.data.expect("data").user;
    assert_eq!(user.id(), "u-1");
    assert_eq!(user.email(), "a@b.com");
    assert_eq!(user.role(), Role::Admin);
}

#[test]
fn message_or_prefers_non_blank_server_message() {
    let resp = ApiResponse::<()> {
        success: false,
        data: None,
        message: Some("  Account not verified ".to_owned()),
    };
    assert_eq!(resp.message_or("fallback"), "Account not verified");

    let blank = ApiResponse::<()> {
        success: false,
        data: None,
        message: Some("   ".to_owned()),
    };
    assert_eq!(blank.message_or("fallback"), "fallback");
}

// =============================================================
// Role / Identity
// =============================================================

#[test]
fn role_rejects_values_outside_the_closed_set() {
    assert_eq!(serde_json::from_str::<Role>(r#""user""#).ok(), Some(Role::User));
    assert!(serde_json::from_str::<Role>(r#""superuser""#).is_err());
}

#[test]
fn identity_with_unknown_role_fails_to_decode() {
    let raw = r#"{ "id": "u-1", "email": "a@b.com", "role": "owner" }"#;
    assert!(serde_json::from_str::<Identity>(raw).is_err());
}

#[test]
fn verify_request_serializes_code_as_otp() {
    let body = VerifyEmailRequest { email: "a@b.com", otp: "1234" };
    assert_eq!(
        serde_json::to_value(body).expect("json"),
        serde_json::json!({ "email": "a@b.com", "otp": "1234" })
    );
}
