//! Utility helpers shared across pages and auth operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure input handling lives here so it can be tested without a browser.

pub mod otp;
pub mod validate;
