//! Wire DTOs for the session boundary.
//!
//! DESIGN
//! ======
//! Every auth endpoint answers with the same `{ success, data, message }`
//! envelope. Request bodies borrow from the caller so nothing sensitive is
//! copied more than once.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Uniform response envelope returned by the storefront API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the server accepted the request.
    pub success: bool,
    /// Endpoint-specific payload, present on most successful calls.
    pub data: Option<T>,
    /// Human-readable server message, typically set on failure.
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Server message, or `fallback` when the server sent none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_owned()
    }
}

/// Closed set of roles assigned by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// The authenticated account.
///
/// Fields are read-only: a role change on the server arrives as a new
/// `Identity` from a fresh round-trip, never as an in-place edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    id: String,
    email: String,
    role: Role,
}

impl Identity {
    pub fn new(id: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

/// `data` payload of endpoints that establish a session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserData {
    pub user: Identity,
}

/// `data` payload of `/auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterData {
    /// Email as normalized by the server, if it echoes one back.
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct VerifyEmailRequest<'a> {
    pub email: &'a str,
    pub otp: &'a str,
}

/// Body for endpoints keyed only by an email address.
#[derive(Debug, Serialize)]
pub struct EmailRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResetPasswordRequest<'a> {
    pub token: &'a str,
    pub password: &'a str,
}

/// Body for requests that carry no payload.
#[derive(Debug, Default, Serialize)]
pub struct Empty {}
