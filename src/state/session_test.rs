use std::sync::{Arc, Mutex};

use super::*;

fn alice() -> Identity {
    Identity::new("u-1", "alice@shop.test", Role::User)
}

fn recorder(store: &SessionStore) -> Arc<Mutex<Vec<Session>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |s| sink.lock().expect("sink").push(s.clone()));
    seen
}

#[test]
fn new_store_is_restoring_without_identity() {
    let session = SessionStore::new().snapshot();
    assert!(session.is_loading());
    assert!(!session.is_authenticated());
}

#[test]
fn set_identity_replaces_whole_record_and_ends_loading() {
    let store = SessionStore::new();
    store.set_identity(Some(alice()));
    assert_eq!(store.snapshot(), Session::signed_in(alice()));

    store.set_identity(None);
    assert_eq!(store.snapshot(), Session::signed_out());
}

#[test]
fn listeners_see_each_committed_session_in_order() {
    let store = SessionStore::new();
    let seen = recorder(&store);

    store.set_identity(Some(alice()));
    store.set_identity(None);

    let seen = seen.lock().expect("seen");
    assert_eq!(*seen, vec![Session::signed_in(alice()), Session::signed_out()]);
}

#[test]
fn identical_write_does_not_notify() {
    let store = SessionStore::new();
    store.set_identity(Some(alice()));
    let seen = recorder(&store);

    store.set_identity(Some(alice()));

    assert!(seen.lock().expect("seen").is_empty());
}

#[test]
fn listener_can_read_store_during_notification() {
    let store = SessionStore::new();
    let observed = Arc::new(Mutex::new(None));
    let reader = store.clone();
    let slot = Arc::clone(&observed);
    store.subscribe(move |_| *slot.lock().expect("slot") = Some(reader.snapshot()));

    store.set_identity(Some(alice()));

    assert_eq!(*observed.lock().expect("slot"), Some(Session::signed_in(alice())));
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = SessionStore::new();
    let seen = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&seen);
    let id = store.subscribe(move |_| *sink.lock().expect("sink") += 1);

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.set_identity(Some(alice()));

    assert_eq!(*seen.lock().expect("seen"), 0);
}

#[test]
fn begin_restore_clears_identity_and_sets_loading() {
    let store = SessionStore::new();
    store.set_identity(Some(alice()));
    store.begin_restore();
    assert_eq!(store.snapshot(), Session::restoring());
}

#[test]
fn session_role_follows_identity() {
    assert_eq!(Session::signed_in(alice()).role(), Some(Role::User));
    assert_eq!(Session::signed_out().role(), None);
}
