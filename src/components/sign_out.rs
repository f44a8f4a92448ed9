//! Sign-out button.

use leptos::prelude::*;

use crate::state::auth::use_auth;

/// Clears the session immediately; the private guard then leaves the page.
#[component]
pub fn SignOutButton() -> impl IntoView {
    let auth = use_auth();
    let on_click = move |_| {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            auth.logout().await;
        });
    };

    view! {
        <button class="auth-link-button" type="button" on:click=on_click>
            "Sign out"
        </button>
    }
}
