//! Error taxonomy for auth operations.
//!
//! ERROR HANDLING
//! ==============
//! Operations return these as values so the triggering page can show an
//! inline message and stay interactive. Insufficient role is not an error:
//! guards express it as a redirect.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure below the envelope: the request never produced a usable response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Error returned by every operation on [`crate::state::auth::AuthService`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Local input rejected before any network call.
    #[error("{0}")]
    Validation(&'static str),
    /// The server refused the credentials, code or token.
    #[error("{0}")]
    Authentication(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The same operation is already outstanding.
    #[error("a request is already in progress")]
    InFlight,
    /// A sign-out started while this request was outstanding; its result was dropped.
    #[error("signed out before the request completed")]
    Superseded,
}

const RETRY_MESSAGE: &str = "Something went wrong. Please try again.";

impl AuthError {
    /// Text suitable for an inline form message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => (*message).to_owned(),
            Self::Authentication(message) => message.clone(),
            Self::Transport(_) | Self::Superseded => RETRY_MESSAGE.to_owned(),
            Self::InFlight => "Please wait for the current request to finish.".to_owned(),
        }
    }
}
