//! Typed payloads carried across one navigation.
//!
//! DESIGN
//! ======
//! A `Handoff<T>` is a single slot provided through context: the source page
//! puts a value before navigating and the destination takes it on entry.
//! Nothing is persisted, so a reload of the destination finds the slot empty
//! and must handle the missing-payload branch explicitly.

#[cfg(test)]
#[path = "handoff_test.rs"]
mod handoff_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Registration result handed to the verification screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingVerification {
    pub email: String,
}

/// Single-slot carrier for one navigation transition.
#[derive(Debug)]
pub struct Handoff<T> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> Clone for Handoff<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for Handoff<T> {
    fn default() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }
}

impl<T> Handoff<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value`, replacing anything not yet taken.
    pub fn put(&self, value: T) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(value);
    }

    /// Remove and return the payload, leaving the slot empty.
    pub fn take(&self) -> Option<T> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}
