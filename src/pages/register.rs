//! Registration page.
//!
//! A successful registration does not sign the user in: the pending email is
//! handed to the verification page through the `Handoff` slot.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_message::FormMessage;
use crate::config::RouteConfig;
use crate::state::auth::{RegisterForm, use_auth};
use crate::state::handoff::{Handoff, PendingVerification};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let routes = expect_context::<RouteConfig>();
    let handoff = expect_context::<Handoff<PendingVerification>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
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
        let handoff = handoff.clone();
        let navigate = navigate.clone();
        let verify_path = routes.verify_email.clone();
        let fields = form.get();
        leptos::task::spawn_local(async move {
            match auth.register(&fields).await {
                Ok(pending) => {
                    handoff.put(pending);
                    navigate(&verify_path, Default::default());
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
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {form_field(form, "Name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                    {form_field(form, "Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {form_field(form, "Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {form_field(
                        form,
                        "Confirm password",
                        "password",
                        |f| f.confirm_password.clone(),
                        |f, v| f.confirm_password = v,
                    )}
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <FormMessage message=error error=true/>
                <div class="auth-links">
                    <A href="/login">"Already have an account? Sign in"</A>
                </div>
            </div>
        </div>
    }
}

/// One text input bound to a field of the form signal.
fn form_field(
    form: RwSignal<RegisterForm>,
    label: &'static str,
    kind: &'static str,
    get: fn(&RegisterForm) -> String,
    set: fn(&mut RegisterForm, String),
) -> impl IntoView {
    view! {
        <input
            class="auth-input"
            type=kind
            placeholder=label
            prop:value=move || form.with(get)
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| set(f, value));
            }
        />
    }
}
