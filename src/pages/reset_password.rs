//! Password reset confirmation page.
//!
//! The reset token arrives in the `token` query parameter of the emailed link.
//! A missing token is reported by `confirm_password_reset` like any other
//! validation failure.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use super::login::{LoginNotice, login_with_notice};
use crate::components::form_message::FormMessage;
use crate::config::RouteConfig;
use crate::state::auth::{ConfirmOutcome, use_auth};

const TOKEN_PARAM: &str = "token";

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let routes = expect_context::<RouteConfig>();
    let navigate = use_navigate();
    let query = use_query_map();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);
        let auth = auth.clone();
        let navigate = navigate.clone();
        let login_path = login_with_notice(&routes.login, LoginNotice::PasswordReset);
        let token = query.with(|q| q.get(TOKEN_PARAM)).unwrap_or_default();
        let (password_value, confirm_value) = (password.get(), confirm.get());
        leptos::task::spawn_local(async move {
            match auth.confirm_password_reset(&token, &password_value, &confirm_value).await {
                Ok(ConfirmOutcome::SignedIn(_)) => {}
                Ok(ConfirmOutcome::LoginRequired) => navigate(&login_path, Default::default()),
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
                <h1>"Choose a new password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Update password" }}
                    </button>
                </form>
                <FormMessage message=error error=true/>
                <div class="auth-links">
                    <A href="/forgot-password">"Request a new link"</A>
                </div>
            </div>
        </div>
    }
}
