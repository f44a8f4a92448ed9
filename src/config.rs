//! Build-time configuration for the session core.
//!
//! Values come from `option_env!` so a storefront build can point at another
//! API or change the post-verification contract without code edits. Nothing
//! here is secret.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::types::Role;

/// Navigation targets consumed by guards and pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteConfig {
    pub login: String,
    pub register: String,
    pub verify_email: String,
    /// Landing page for every role without a dedicated one.
    pub default_landing: String,
    pub admin_landing: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login: "/login".to_owned(),
            register: "/register".to_owned(),
            verify_email: "/verify-email".to_owned(),
            default_landing: "/".to_owned(),
            admin_landing: "/admin".to_owned(),
        }
    }
}

impl RouteConfig {
    /// Where an authenticated user of `role` is sent when a page is not for them.
    pub fn landing_for(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin_landing,
            Role::User => &self.default_landing,
        }
    }
}

/// What a successful verification or password reset leads to.
///
/// This mirrors the server contract and must be set to match it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PostConfirm {
    /// The server response carries the account and a session cookie.
    SignIn,
    /// The user is sent to the login page to sign in explicitly.
    #[default]
    RequireLogin,
}

impl PostConfirm {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "sign-in" | "signin" | "auto-login" => Self::SignIn,
            _ => Self::RequireLogin,
        }
    }
}

/// Server-contract choices applied by auth operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthPolicy {
    pub after_verify: PostConfirm,
    pub after_reset: PostConfirm,
}

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Empty means same-origin requests.
    pub api_base_url: String,
    pub routes: RouteConfig,
    pub policy: AuthPolicy,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_values(
            option_env!("STOREFRONT_API_BASE_URL"),
            option_env!("STOREFRONT_AFTER_VERIFY"),
            option_env!("STOREFRONT_AFTER_RESET"),
        )
    }

    fn from_values(api_base_url: Option<&str>, after_verify: Option<&str>, after_reset: Option<&str>) -> Self {
        let api_base_url = api_base_url.and_then(normalize_value).unwrap_or_default();
        let after_verify = after_verify
            .and_then(normalize_value)
            .map_or_else(PostConfirm::default, |v| PostConfirm::parse(&v));
        let after_reset = after_reset
            .and_then(normalize_value)
            .map_or_else(PostConfirm::default, |v| PostConfirm::parse(&v));

        let config = Self {
            api_base_url,
            routes: RouteConfig::default(),
            policy: AuthPolicy {
                after_verify,
                after_reset,
            },
        };
        log::debug!(
            "session config: api_base_url={:?} after_verify={:?} after_reset={:?}",
            config.api_base_url,
            config.policy.after_verify,
            config.policy.after_reset
        );
        config
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
