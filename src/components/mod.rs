//! Reusable UI pieces shared by the auth pages.

pub mod form_message;
pub mod loading;
pub mod otp_input;
pub mod sign_out;
