//! Pure render-or-redirect decisions.
//!
//! DESIGN
//! ======
//! A guard is a function of the current session and its configuration; it
//! holds no state of its own. The navigation side effect lives in
//! `guards::view`, so every branch here is testable without a router.

#[cfg(test)]
#[path = "decision_test.rs"]
mod decision_test;

use crate::config::RouteConfig;
use crate::net::types::Role;
use crate::state::session::Session;

/// Outcome of one guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The initial restore is still running; show the neutral placeholder.
    Pending,
    /// Render the guarded subtree.
    Render,
    /// Leave for another route.
    RedirectTo(String),
}

impl GuardDecision {
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::RedirectTo(path) => Some(path),
            Self::Pending | Self::Render => None,
        }
    }
}

/// A routing decision unit over the session.
pub trait Guard {
    fn decide(&self, session: &Session, routes: &RouteConfig) -> GuardDecision;
}

/// Pages for signed-out visitors only (login, register, password reset).
#[derive(Clone, Copy, Debug, Default)]
pub struct PublicOnlyGuard;

impl Guard for PublicOnlyGuard {
    fn decide(&self, session: &Session, routes: &RouteConfig) -> GuardDecision {
        if session.is_loading() {
            return GuardDecision::Pending;
        }
        match session.role() {
            Some(role) => GuardDecision::RedirectTo(routes.landing_for(role).to_owned()),
            None => GuardDecision::Render,
        }
    }
}

/// Pages for signed-in users, optionally limited to some roles.
///
/// An empty role list admits every authenticated user.
#[derive(Clone, Debug, Default)]
pub struct PrivateGuard {
    allowed_roles: Vec<Role>,
}

impl PrivateGuard {
    pub fn new(allowed_roles: Vec<Role>) -> Self {
        Self { allowed_roles }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.is_empty() || self.allowed_roles.contains(&role)
    }
}

impl Guard for PrivateGuard {
    fn decide(&self, session: &Session, routes: &RouteConfig) -> GuardDecision {
        if session.is_loading() {
            return GuardDecision::Pending;
        }
        match session.role() {
            None => GuardDecision::RedirectTo(routes.login.clone()),
            Some(role) if !self.allows(role) => GuardDecision::RedirectTo(routes.landing_for(role).to_owned()),
            Some(_) => GuardDecision::Render,
        }
    }
}
