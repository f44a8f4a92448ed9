//! Inline feedback line under an auth form.

use leptos::prelude::*;

#[component]
pub fn FormMessage(#[prop(into)] message: Signal<Option<String>>, #[prop(optional)] error: bool) -> impl IntoView {
    let class = if error {
        "form-message form-message--error"
    } else {
        "form-message"
    };
    view! {
        <Show when=move || message.with(Option::is_some)>
            <p class=class role="status">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
