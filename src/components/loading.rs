//! Neutral placeholder shown while no decisive render is possible.

use leptos::prelude::*;

#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="session-loading" aria-busy="true">
            <span class="session-loading__spinner"></span>
        </div>
    }
}
