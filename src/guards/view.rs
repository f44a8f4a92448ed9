//! Guard components wrapping route views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route re-derives its decision from the session signal, so a
//! login, logout or restore is reflected on the next render without any page
//! holding its own copy of the identity.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::decision::{Guard, GuardDecision, PrivateGuard, PublicOnlyGuard};
use crate::components::loading::LoadingView;
use crate::config::RouteConfig;
use crate::net::types::Role;
use crate::state::session::use_session;

/// Navigate whenever `decision` settles on a redirect.
///
/// The history entry is replaced so Back does not return to the bounced page.
pub fn install_guard_redirect<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::RedirectTo(path) = decision.get() {
            navigate(
                &path,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}

fn guarded<G>(guard: G, children: ChildrenFn) -> impl IntoView
where
    G: Guard + Send + Sync + 'static,
{
    let session = use_session();
    let routes = expect_context::<RouteConfig>();
    let decision = Memo::new(move |_| guard.decide(&session.get(), &routes));
    install_guard_redirect(decision, use_navigate());

    // Redirects keep the placeholder up until navigation lands.
    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Pending | GuardDecision::RedirectTo(_) => view! { <LoadingView/> }.into_any(),
    }
}

/// Renders children only for signed-out visitors.
#[component]
pub fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    guarded(PublicOnlyGuard, children)
}

/// Renders children only for signed-in users whose role is allowed.
#[component]
pub fn Private(#[prop(optional)] allowed_roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    guarded(PrivateGuard::new(allowed_roles), children)
}
