//! Login page with email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `PublicOnly`: once `login` commits an identity the guard
//! re-evaluates and moves the user to their landing page, so this page never
//! navigates on success itself.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::components::form_message::FormMessage;
use crate::state::auth::use_auth;

/// Query parameter carrying a one-line notice from the previous flow.
const NOTICE_PARAM: &str = "notice";

/// Notices other pages can hand to the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginNotice {
    Verified,
    PasswordReset,
}

impl LoginNotice {
    fn key(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::PasswordReset => "reset",
        }
    }

    fn parse(key: &str) -> Option<Self> {
        match key {
            "verified" => Some(Self::Verified),
            "reset" => Some(Self::PasswordReset),
            _ => None,
        }
    }

    fn text(self) -> &'static str {
        match self {
            Self::Verified => "Email verified. Please sign in.",
            Self::PasswordReset => "Password updated. Please sign in.",
        }
    }
}

/// Login URL that shows `notice` on arrival.
pub fn login_with_notice(login_path: &str, notice: LoginNotice) -> String {
    format!("{login_path}?{NOTICE_PARAM}={}", notice.key())
}

fn notice_text(key: Option<&str>) -> Option<&'static str> {
    key.and_then(LoginNotice::parse).map(LoginNotice::text)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let query = use_query_map();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let notice = Signal::derive(move || {
        let key = query.with(|q| q.get(NOTICE_PARAM));
        notice_text(key.as_deref()).map(str::to_owned)
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);
        let auth = auth.clone();
        let (email_value, password_value) = (email.get(), password.get());
        leptos::task::spawn_local(async move {
            let result = auth.login(&email_value, &password_value).await;
            // The guard may already have replaced this page.
            if let Err(e) = result {
                let _ = error.try_set(Some(e.user_message()));
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <FormMessage message=notice/>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <FormMessage message=error error=true/>
                <div class="auth-links">
                    <A href="/forgot-password">"Forgot password?"</A>
                    <A href="/register">"Create an account"</A>
                </div>
            </div>
        </div>
    }
}
