//! Auth operations: the only code that writes the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these from `spawn_local` tasks and render the returned error
//! inline. Navigation after success is left to guard re-evaluation.
//!
//! CONCURRENCY
//! ===========
//! Operations of different kinds may overlap; two of the same kind may not
//! (the second returns `AuthError::InFlight` without a request). Any result
//! that would establish a session is dropped if a sign-out started while it
//! was outstanding, so logout always wins.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::expect_context;

use super::handoff::PendingVerification;
use super::session::{Session, SessionStore};
use crate::config::{AuthPolicy, PostConfirm};
use crate::error::{AuthError, TransportError};
use crate::net::api::{self, AuthTransport, HttpTransport};
use crate::net::types::{
    ApiResponse, EmailRequest, Empty, Identity, LoginRequest, RegisterData, RegisterRequest,
    ResetPasswordRequest, UserData, VerifyEmailRequest,
};
use crate::util::validate;

/// Fields collected by the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Result of a successful verification or password reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// A session was established for this identity.
    SignedIn(Identity),
    /// The user must now sign in explicitly.
    LoginRequired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Operation {
    Login,
    Register,
    VerifyEmail,
    ResendVerification,
    Logout,
    RequestReset,
    ConfirmReset,
    Refresh,
}

struct Inner<T> {
    transport: T,
    store: SessionStore,
    policy: AuthPolicy,
    in_flight: Mutex<HashSet<Operation>>,
    initialized: AtomicBool,
    sign_outs: AtomicU64,
}

/// Cloneable handle to the auth operations for one session store.
pub struct AuthService<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for AuthService<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// The service wired to the browser transport.
pub type Auth = AuthService<HttpTransport>;

/// Marks an operation as outstanding until dropped.
struct InFlight<'a> {
    set: &'a Mutex<HashSet<Operation>>,
    op: Operation,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.set.lock().unwrap_or_else(PoisonError::into_inner).remove(&self.op);
    }
}

const INVALID_CREDENTIALS: &str = "Invalid email or password.";
const REGISTRATION_FAILED: &str = "Registration failed.";
const VERIFICATION_FAILED: &str = "Invalid or expired code.";
const RESEND_FAILED: &str = "Could not resend the code.";
const RESET_REQUEST_FAILED: &str = "Could not send the reset email.";
const RESET_FAILED: &str = "This reset link is invalid or has expired.";

impl<T: AuthTransport> AuthService<T> {
    pub fn new(transport: T, store: SessionStore, policy: AuthPolicy) -> Self {
        Self {
            inner: Arc::new(Inner {
                transport,
                store,
                policy,
                in_flight: Mutex::new(HashSet::new()),
                initialized: AtomicBool::new(false),
                sign_outs: AtomicU64::new(0),
            }),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.inner.store
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.inner.transport
    }

    /// Restore a previous session, at most once per service.
    ///
    /// Holds `loading` for the duration and clears it exactly once. Any
    /// failure resolves to signed out.
    pub async fn initialize(&self) -> Session {
        if self.inner.initialized.swap(true, Ordering::SeqCst) {
            log::debug!("session restore already started");
            return self.inner.store.snapshot();
        }
        self.inner.store.begin_restore();
        let epoch = self.sign_out_epoch();

        let identity = match self.inner.transport.get::<UserData>(api::ME).await {
            Ok(ApiResponse {
                success: true,
                data: Some(data),
                ..
            }) => Some(data.user),
            Ok(resp) => {
                log::debug!("no session to restore: {}", resp.message_or("not signed in"));
                None
            }
            Err(e) => {
                log::warn!("session restore failed: {e}");
                None
            }
        };

        let identity = identity.filter(|_| self.sign_out_epoch() == epoch);
        self.inner.store.set_identity(identity);
        self.inner.store.snapshot()
    }

    /// Re-check the session with the server.
    ///
    /// A rejection or a 401/403 status invalidates the session; any other
    /// transport failure leaves it as is. Does nothing while the initial
    /// restore is in flight.
    pub async fn refresh(&self) -> Result<(), AuthError> {
        if self.inner.store.snapshot().is_loading() {
            return Ok(());
        }
        let _guard = self.begin(Operation::Refresh)?;
        let epoch = self.sign_out_epoch();

        let result = self.inner.transport.get::<UserData>(api::ME).await;
        if self.sign_out_epoch() != epoch {
            return Err(AuthError::Superseded);
        }
        match result {
            Ok(ApiResponse {
                success: true,
                data: Some(data),
                ..
            }) => self.inner.store.set_identity(Some(data.user)),
            Ok(resp) => {
                log::info!("session invalidated by server: {}", resp.message_or("unauthorized"));
                self.inner.store.set_identity(None);
            }
            Err(TransportError::Status {
                status: status @ (401 | 403),
                ..
            }) => {
                log::info!("session invalidated by server: status {status}");
                self.inner.store.set_identity(None);
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    /// Sign in with email and password.
    ///
    /// On failure the current identity is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let (email, password) = validate::validate_credentials(email, password).map_err(AuthError::Validation)?;
        let _guard = self.begin(Operation::Login)?;
        let epoch = self.sign_out_epoch();

        let resp = self
            .inner
            .transport
            .post::<_, UserData>(
                api::LOGIN,
                &LoginRequest {
                    email: &email,
                    password: &password,
                },
            )
            .await?;
        let identity = session_identity(resp, INVALID_CREDENTIALS)?;
        self.commit(epoch, identity)
    }

    /// Create an unverified account. The session is not touched.
    pub async fn register(&self, form: &RegisterForm) -> Result<PendingVerification, AuthError> {
        let (name, email, password) =
            validate::validate_registration(&form.name, &form.email, &form.password, &form.confirm_password)
                .map_err(AuthError::Validation)?;
        let _guard = self.begin(Operation::Register)?;

        let resp = self
            .inner
            .transport
            .post::<_, RegisterData>(api::REGISTER, &RegisterRequest { name, email, password })
            .await?;
        if !resp.success {
            return Err(AuthError::Authentication(resp.message_or(REGISTRATION_FAILED)));
        }
        let email = resp
            .data
            .and_then(|d| d.email)
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| email.to_owned());
        log::debug!("registered account pending verification: {email}");
        Ok(PendingVerification { email })
    }

    /// Submit the emailed code.
    ///
    /// Anything other than exactly four digits is rejected locally.
    pub async fn verify_email(&self, email: &str, code: &str) -> Result<ConfirmOutcome, AuthError> {
        let code = validate::validate_otp(code).map_err(AuthError::Validation)?;
        let email = validate::validate_email(email).map_err(AuthError::Validation)?;
        let _guard = self.begin(Operation::VerifyEmail)?;
        let epoch = self.sign_out_epoch();

        let resp = self
            .inner
            .transport
            .post::<_, UserData>(api::VERIFY_EMAIL, &VerifyEmailRequest { email: &email, otp: code })
            .await?;
        if !resp.success {
            return Err(AuthError::Authentication(resp.message_or(VERIFICATION_FAILED)));
        }
        self.confirm(epoch, resp.data, self.inner.policy.after_verify)
    }

    pub async fn resend_verification(&self, email: &str) -> Result<(), AuthError> {
        let email = validate::validate_email(email).map_err(AuthError::Validation)?;
        let _guard = self.begin(Operation::ResendVerification)?;

        let resp = self
            .inner
            .transport
            .post::<_, serde_json::Value>(api::RESEND_VERIFICATION, &EmailRequest { email: &email })
            .await?;
        expect_success(&resp, RESEND_FAILED)
    }

    /// Sign out locally, then tell the server.
    ///
    /// The local identity is cleared even if the server call fails.
    pub async fn logout(&self) {
        self.inner.sign_outs.fetch_add(1, Ordering::SeqCst);
        self.inner.store.set_identity(None);

        let Ok(_guard) = self.begin(Operation::Logout) else {
            return;
        };
        match self
            .inner
            .transport
            .post::<_, serde_json::Value>(api::LOGOUT, &Empty::default())
            .await
        {
            Ok(resp) if resp.success => log::debug!("server session closed"),
            Ok(resp) => log::warn!("server logout rejected: {}", resp.message_or("no message")),
            Err(e) => log::warn!("server logout failed: {e}"),
        }
    }

    /// Ask the server to email a reset link. The session is not touched.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let email = validate::validate_email(email).map_err(AuthError::Validation)?;
        let _guard = self.begin(Operation::RequestReset)?;

        let resp = self
            .inner
            .transport
            .post::<_, serde_json::Value>(api::FORGOT_PASSWORD, &EmailRequest { email: &email })
            .await?;
        expect_success(&resp, RESET_REQUEST_FAILED)
    }

    pub async fn confirm_password_reset(
        &self,
        token: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<ConfirmOutcome, AuthError> {
        let (token, password) = validate::validate_password_reset(token, new_password, confirm_password)
            .map_err(AuthError::Validation)?;
        let _guard = self.begin(Operation::ConfirmReset)?;
        let epoch = self.sign_out_epoch();

        let resp = self
            .inner
            .transport
            .post::<_, UserData>(api::RESET_PASSWORD, &ResetPasswordRequest { token, password })
            .await?;
        if !resp.success {
            return Err(AuthError::Authentication(resp.message_or(RESET_FAILED)));
        }
        self.confirm(epoch, resp.data, self.inner.policy.after_reset)
    }

    fn begin(&self, op: Operation) -> Result<InFlight<'_>, AuthError> {
        let mut set = self.inner.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if !set.insert(op) {
            log::debug!("{op:?} ignored: already in flight");
            return Err(AuthError::InFlight);
        }
        Ok(InFlight {
            set: &self.inner.in_flight,
            op,
        })
    }

    fn sign_out_epoch(&self) -> u64 {
        self.inner.sign_outs.load(Ordering::SeqCst)
    }

    /// Establish `identity` unless a sign-out started after `epoch`.
    fn commit(&self, epoch: u64, identity: Identity) -> Result<Identity, AuthError> {
        if self.sign_out_epoch() != epoch {
            log::info!("discarding sign-in superseded by sign-out");
            return Err(AuthError::Superseded);
        }
        self.inner.store.set_identity(Some(identity.clone()));
        log::info!("signed in as {:?}", identity.role());
        Ok(identity)
    }

    fn confirm(&self, epoch: u64, data: Option<UserData>, policy: PostConfirm) -> Result<ConfirmOutcome, AuthError> {
        match (policy, data) {
            (PostConfirm::SignIn, Some(data)) => self.commit(epoch, data.user).map(ConfirmOutcome::SignedIn),
            (PostConfirm::SignIn, None) => {
                log::warn!("server confirmed without an account; falling back to explicit login");
                Ok(ConfirmOutcome::LoginRequired)
            }
            (PostConfirm::RequireLogin, _) => Ok(ConfirmOutcome::LoginRequired),
        }
    }
}

/// Extract the identity from a session-establishing response.
fn session_identity(resp: ApiResponse<UserData>, fallback: &str) -> Result<Identity, AuthError> {
    match resp {
        ApiResponse {
            success: true,
            data: Some(data),
            ..
        } => Ok(data.user),
        ApiResponse { success: true, .. } => Err(TransportError::Decode("response is missing the signed-in user".to_owned()).into()),
        resp => Err(AuthError::Authentication(resp.message_or(fallback))),
    }
}

fn expect_success<D>(resp: &ApiResponse<D>, fallback: &str) -> Result<(), AuthError> {
    if resp.success {
        Ok(())
    } else {
        Err(AuthError::Authentication(resp.message_or(fallback)))
    }
}

/// Auth operations provided by the application shell.
pub fn use_auth() -> Auth {
    expect_context::<Auth>()
}
