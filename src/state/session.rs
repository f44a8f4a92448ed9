//! Session store: the one record of who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth operations are the only writers. Guards and pages read a Leptos
//! signal mirrored from the store, so every committed write is visible to
//! the render that follows it.
//!
//! DESIGN
//! ======
//! The record is replaced whole on every write; `identity` and `loading` are
//! never patched separately. Listeners run after the lock is released.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use leptos::prelude::*;

use crate::net::types::{Identity, Role};

/// Current identity plus the initial-restore flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
    loading: bool,
}

impl Session {
    /// Initial restore still in flight.
    pub fn restoring() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            identity: None,
            loading: false,
        }
    }

    pub fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            loading: false,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(Identity::role)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

struct StoreInner {
    session: Session,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Shared, single-writer session store.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// A store that has not finished restoring; guards render the placeholder.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                session: Session::restoring(),
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.lock().session.clone()
    }

    /// Register a listener called with every newly committed session.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(lid, _)| *lid != id);
        inner.listeners.len() != before
    }

    /// Atomically replace the identity and end any restore.
    pub(crate) fn set_identity(&self, identity: Option<Identity>) {
        self.replace(Session { identity, loading: false });
    }

    pub(crate) fn begin_restore(&self) {
        self.replace(Session::restoring());
    }

    fn replace(&self, session: Session) {
        let (committed, listeners) = {
            let mut inner = self.lock();
            if inner.session == session {
                return;
            }
            inner.session = session;
            let listeners: Vec<Listener> = inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (inner.session.clone(), listeners)
        };
        log::debug!(
            "session committed: authenticated={} loading={}",
            committed.is_authenticated(),
            committed.is_loading()
        );
        for listener in listeners {
            listener(&committed);
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Mirror `store` into a read-only signal and provide it as context.
pub fn provide_session(store: &SessionStore) -> ReadSignal<Session> {
    let (session, set_session) = signal(store.snapshot());
    store.subscribe(move |s: &Session| set_session.set(s.clone()));
    provide_context(session);
    session
}

/// Read access to the current session for guards and pages.
pub fn use_session() -> ReadSignal<Session> {
    expect_context::<ReadSignal<Session>>()
}
