//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own form state and call `AuthService`. Access control lives in the
//! route guards wrapped around them in `app`, so no page checks the session
//! before rendering.

pub mod admin;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod reset_password;
pub mod verify_email;
