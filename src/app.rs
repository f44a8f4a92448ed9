//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::guards::{Private, PublicOnly};
use crate::net::api::HttpTransport;
use crate::net::types::Role;
use crate::pages::{
    admin::AdminPage, forgot_password::ForgotPasswordPage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage, register::RegisterPage, reset_password::ResetPasswordPage,
    verify_email::VerifyEmailPage,
};
use crate::state::auth::AuthService;
use crate::state::handoff::{Handoff, PendingVerification};
use crate::state::session::{SessionStore, provide_session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the one session store, provides it and the auth service to every
/// route, and starts the session restore in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::load();
    let store = SessionStore::new();
    let auth = AuthService::new(HttpTransport::new(config.api_base_url), store.clone(), config.policy);

    provide_session(&store);
    provide_context(auth.clone());
    provide_context(config.routes);
    provide_context(Handoff::<PendingVerification>::new());

    // On the server the store stays in its restoring state, matching the
    // first client render.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        auth.initialize().await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront-session.css"/>
        <Title text="Storefront"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=|| view! { <PublicOnly><LoginPage/></PublicOnly> }/>
                <Route path=StaticSegment("register") view=|| view! { <PublicOnly><RegisterPage/></PublicOnly> }/>
                <Route
                    path=StaticSegment("verify-email")
                    view=|| view! { <PublicOnly><VerifyEmailPage/></PublicOnly> }
                />
                <Route
                    path=StaticSegment("forgot-password")
                    view=|| view! { <PublicOnly><ForgotPasswordPage/></PublicOnly> }
                />
                <Route
                    path=StaticSegment("reset-password")
                    view=|| view! { <PublicOnly><ResetPasswordPage/></PublicOnly> }
                />
                <Route path=StaticSegment("") view=|| view! { <Private><HomePage/></Private> }/>
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <Private allowed_roles=vec![Role::Admin]><AdminPage/></Private> }
                />
            </Routes>
        </Router>
    }
}
