//! Route guards.
//!
//! ARCHITECTURE
//! ============
//! `decision` holds the pure guard logic; `view` binds it to the session
//! signal and the router.

pub mod decision;
pub mod view;

pub use decision::{Guard, GuardDecision, PrivateGuard, PublicOnlyGuard};
pub use view::{Private, PublicOnly, install_guard_redirect};
