//! # storefront-session
//!
//! Client-side session core for the storefront: one session store, the auth
//! operations that write it, and the route guards that read it.
//!
//! Pages never hold their own copy of the identity. They call `AuthService`
//! and let `PublicOnly` / `Private` react to the committed session.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod guards;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
