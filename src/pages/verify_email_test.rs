use futures::executor::block_on;

use super::*;
use crate::config::AuthPolicy;
use crate::net::api::REGISTER;
use crate::net::fake::FakeTransport;
use crate::state::auth::{AuthService, RegisterForm};
use crate::state::session::SessionStore;

#[test]
fn verify_entry_uses_handed_over_email() {
    let pending = PendingVerification {
        email: "a@b.com".to_owned(),
    };
    assert_eq!(
        verify_entry(Some(pending.clone()), &RouteConfig::default()),
        VerifyEntry::Ready(pending)
    );
}

#[test]
fn verify_entry_without_payload_redirects_to_register() {
    assert_eq!(
        verify_entry(None, &RouteConfig::default()),
        VerifyEntry::RedirectTo("/register".to_owned())
    );
}

#[test]
fn register_then_verify_screen_without_state_redirects() {
    let store = SessionStore::new();
    let auth = AuthService::new(FakeTransport::new().ok_empty(REGISTER), store, AuthPolicy::default());
    let handoff = Handoff::new();
    let routes = RouteConfig::default();

    let form = RegisterForm {
        name: "Ann".to_owned(),
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        confirm_password: "pw".to_owned(),
    };
    let pending = block_on(auth.register(&form)).expect("register");
    assert_eq!(
        pending,
        PendingVerification {
            email: "a@b.com".to_owned()
        }
    );

    // Navigating without attaching the payload.
    assert_eq!(
        verify_entry(handoff.take(), &routes),
        VerifyEntry::RedirectTo("/register".to_owned())
    );

    // The normal path hands it over exactly once.
    handoff.put(pending.clone());
    assert_eq!(verify_entry(handoff.take(), &routes), VerifyEntry::Ready(pending));
    assert_eq!(
        verify_entry(handoff.take(), &routes),
        VerifyEntry::RedirectTo("/register".to_owned())
    );
}
