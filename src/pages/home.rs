//! Default landing page for signed-in users.

use leptos::prelude::*;

use crate::components::sign_out::SignOutButton;
use crate::state::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let email = move || session.with(|s| s.identity().map(|id| id.email().to_owned()).unwrap_or_default());

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Storefront"</h1>
                <span class="page__user">{email}</span>
                <SignOutButton/>
            </header>
            <p>"You are signed in."</p>
        </div>
    }
}
