//! Client session state and the operations that change it.

pub mod auth;
pub mod handoff;
pub mod session;
