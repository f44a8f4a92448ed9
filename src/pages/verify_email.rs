//! Email verification page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable with a `PendingVerification` handed over by registration.
//! Without one (direct visit, reload) the page sends the user back to
//! registration instead of asking for an email it cannot trust.

#[cfg(test)]
#[path = "verify_email_test.rs"]
mod verify_email_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use super::login::{LoginNotice, login_with_notice};
use crate::components::form_message::FormMessage;
use crate::components::otp_input::OtpInput;
use crate::config::RouteConfig;
use crate::state::auth::{ConfirmOutcome, use_auth};
use crate::state::handoff::{Handoff, PendingVerification};
use crate::util::otp::OtpEntry;

/// How the page starts, given what registration handed over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyEntry {
    Ready(PendingVerification),
    RedirectTo(String),
}

pub fn verify_entry(payload: Option<PendingVerification>, routes: &RouteConfig) -> VerifyEntry {
    match payload {
        Some(pending) => VerifyEntry::Ready(pending),
        None => VerifyEntry::RedirectTo(routes.register.clone()),
    }
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let handoff = expect_context::<Handoff<PendingVerification>>();
    let routes = expect_context::<RouteConfig>();

    match verify_entry(handoff.take(), &routes) {
        VerifyEntry::Ready(pending) => view! { <VerifyForm pending routes/> }.into_any(),
        VerifyEntry::RedirectTo(path) => {
            log::debug!("verify page opened without a pending registration");
            view! { <Redirect path/> }.into_any()
        }
    }
}

#[component]
fn VerifyForm(pending: PendingVerification, routes: RouteConfig) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let email = StoredValue::new(pending.email);
    let entry = RwSignal::new(OtpEntry::new());
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let auth_verify = auth.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let code = entry.get().partial();
        // The typed code is never kept past one attempt.
        entry.update(OtpEntry::clear);
        busy.set(true);
        error.set(None);
        info.set(None);

        let auth = auth_verify.clone();
        let navigate = navigate.clone();
        let login_path = login_with_notice(&routes.login, LoginNotice::Verified);
        let email_value = email.get_value();
        leptos::task::spawn_local(async move {
            match auth.verify_email(&email_value, &code).await {
                // PublicOnly moves a signed-in user to their landing page.
                Ok(ConfirmOutcome::SignedIn(_)) => {}
                Ok(ConfirmOutcome::LoginRequired) => navigate(&login_path, Default::default()),
                Err(e) => {
                    let _ = error.try_set(Some(e.user_message()));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    let on_resend = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);
        let auth = auth.clone();
        let email_value = email.get_value();
        leptos::task::spawn_local(async move {
            match auth.resend_verification(&email_value).await {
                Ok(()) => {
                    let _ = info.try_set(Some("A new code is on its way.".to_owned()));
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
                <h1>"Verify your email"</h1>
                <p class="auth-card__subtitle">
                    "Enter the 4-digit code sent to " <strong>{email.get_value()}</strong>
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <OtpInput entry disabled=busy/>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Verifying..." } else { "Verify" }}
                    </button>
                </form>
                <button class="auth-link-button" type="button" on:click=on_resend disabled=move || busy.get()>
                    "Resend code"
                </button>
                <FormMessage message=info/>
                <FormMessage message=error error=true/>
            </div>
        </div>
    }
}
