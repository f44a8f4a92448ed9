//! Networking modules for the session endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport seam and the browser implementation, `types`
//! defines the wire schema shared with the storefront API.

pub mod api;
#[cfg(test)]
pub(crate) mod fake;
pub mod types;
