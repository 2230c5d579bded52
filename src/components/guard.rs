//! Route Guard Component
//!
//! Renders its children only when the session flag satisfies `access`,
//! otherwise redirects.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use pokedex_domain::{GuardDecision, RouteAccess};

use crate::context::use_session;

#[component]
pub fn Guarded(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    move || match access.decide(session.is_logged_in()) {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
    }
}
