//! Password reset request page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::form_message::FormMessage;
use crate::state::auth::use_auth;

const SENT_NOTICE: &str = "If an account exists for that email, a reset link is on its way.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);
        info.set(None);
        let auth = auth.clone();
        let email_value = email.get();
        leptos::task::spawn_local(async move {
            match auth.request_password_reset(&email_value).await {
                Ok(()) => {
                    let _ = info.try_set(Some(SENT_NOTICE.to_owned()));
                }
                Err(e) => {
                    let _ = error.try_set(Some(e.user_message()));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset your password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Send reset link" }}
                    </button>
                </form>
                <FormMessage message=info/>
                <FormMessage message=error error=true/>
                <div class="auth-links">
                    <A href="/login">"Back to sign in"</A>
                </div>
            </div>
        </div>
    }
}
