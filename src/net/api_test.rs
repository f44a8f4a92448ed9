use super::*;
use crate::net::types::UserData;

#[test]
fn build_url_joins_without_double_slash() {
    assert_eq!(build_url("https://api.shop.test/", LOGIN), "https://api.shop.test/auth/login");
    assert_eq!(build_url("https://api.shop.test", "auth/me"), "https://api.shop.test/auth/me");
}

#[test]
fn build_url_with_empty_base_is_same_origin() {
    assert_eq!(build_url("", ME), "/auth/me");
}

#[test]
fn decode_body_returns_envelope_even_on_error_status() {
    let resp: ApiResponse<UserData> =
        decode_body(401, false, r#"{"success":false,"message":"Invalid credentials"}"#).expect("envelope");
    assert!(!resp.success);
    assert_eq!(resp.message.as_deref(), Some("Invalid credentials"));
}

#[test]
fn decode_body_maps_unparsable_error_to_status() {
    let err = decode_body::<UserData>(502, false, "  <html>Bad Gateway</html> ").unwrap_err();
    assert_eq!(
        err,
        TransportError::Status {
            status: 502,
            message: "<html>Bad Gateway</html>".to_owned(),
        }
    );
}

#[test]
fn decode_body_truncates_long_error_bodies() {
    let body = "x".repeat(500);
    let Err(TransportError::Status { message, .. }) = decode_body::<UserData>(500, false, &body) else {
        panic!("expected status error");
    };
    assert_eq!(message.len(), MAX_ERROR_CHARS);
}

#[test]
fn decode_body_maps_unparsable_success_to_decode() {
    let err = decode_body::<UserData>(200, true, "not json").unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)));
}

#[test]
fn decode_body_rejects_unknown_role() {
    let raw = r#"{"success":true,"data":{"user":{"id":"1","email":"a@b.com","role":"root"}}}"#;
    assert!(matches!(decode_body::<UserData>(200, true, raw), Err(TransportError::Decode(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_transport_is_unavailable() {
    let transport = HttpTransport::new("https://api.shop.test");
    let result = futures::executor::block_on(transport.get::<UserData>(ME));
    assert_eq!(result, Err(TransportError::Unavailable));
}
