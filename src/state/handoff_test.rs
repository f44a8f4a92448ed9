use super::*;

fn pending(email: &str) -> PendingVerification {
    PendingVerification {
        email: email.to_owned(),
    }
}

#[test]
fn take_returns_payload_once() {
    let handoff = Handoff::new();
    handoff.put(pending("a@b.com"));
    assert_eq!(handoff.take(), Some(pending("a@b.com")));
    assert_eq!(handoff.take(), None);
}

#[test]
fn empty_handoff_yields_nothing() {
    let handoff: Handoff<PendingVerification> = Handoff::new();
    assert_eq!(handoff.take(), None);
}

#[test]
fn clones_share_the_slot() {
    let source = Handoff::new();
    let destination = source.clone();
    source.put(pending("first@b.com"));
    source.put(pending("second@b.com"));
    assert_eq!(destination.take(), Some(pending("second@b.com")));
    assert_eq!(source.take(), None);
}
