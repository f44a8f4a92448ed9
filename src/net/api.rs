//! REST transport for the session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, cookies included.
//! Server-side (SSR): every call fails with `TransportError::Unavailable`
//! since the session only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A body that parses as the response envelope is returned whatever the HTTP
//! status, so `401 {"success":false,"message":...}` reaches the caller as an
//! authentication failure rather than a transport failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::ApiResponse;
use crate::error::TransportError;

pub const ME: &str = "/auth/me";
pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const VERIFY_EMAIL: &str = "/auth/verify-email";
pub const RESEND_VERIFICATION: &str = "/auth/resend-verification";
pub const LOGOUT: &str = "/auth/logout";
pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
pub const RESET_PASSWORD: &str = "/auth/reset-password";

/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

/// Request client consumed by auth operations.
///
/// Implementations attach credentials themselves; callers only see the
/// envelope or a transport failure.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, TransportError>;

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, TransportError>;
}

/// Browser transport against the configured API base.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        build_url(&self.base_url, path)
    }
}

impl AuthTransport for HttpTransport {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(path))
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            read_response(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.url(path);
            Err(TransportError::Unavailable)
        }
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(path))
                .credentials(web_sys::RequestCredentials::Include)
                .json(body)
                .map_err(|e| TransportError::Decode(format!("failed to encode request: {e}")))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            read_response(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(path), body);
            Err(TransportError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_response<T: DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<ApiResponse<T>, TransportError> {
    let status = resp.status();
    let ok = resp.ok();
    let text = resp
        .text()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;
    decode_body(status, ok, &text)
}

/// Join the API base and an endpoint path without doubling slashes.
fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Interpret a raw response body.
fn decode_body<T: DeserializeOwned>(status: u16, ok: bool, text: &str) -> Result<ApiResponse<T>, TransportError> {
    match serde_json::from_str::<ApiResponse<T>>(text) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !ok => Err(TransportError::Status {
            status,
            message: truncate(text.trim()),
        }),
        Err(e) => Err(TransportError::Decode(e.to_string())),
    }
}

fn truncate(text: &str) -> String {
    text.chars().take(MAX_ERROR_CHARS).collect()
}
