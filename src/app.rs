//! Pokédex Frontend App
//!
//! Router, session context, and the access rule for each route.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pokedex_domain::AppRoute;

use crate::components::Guarded;
use crate::context::SessionContext;
use crate::pages::{CataloguePage, DetailPage, LoginPage};

#[component]
pub fn App() -> impl IntoView {
    // Provide the session flag to every route
    provide_context(SessionContext::new());

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route
                        path=path!("/login")
                        view=|| view! {
                            <Guarded access=AppRoute::Login.access()>
                                <LoginPage />
                            </Guarded>
                        }
                    />
                    <Route
                        path=path!("/")
                        view=|| view! {
                            <Guarded access=AppRoute::Catalogue.access()>
                                <CataloguePage />
                            </Guarded>
                        }
                    />
                    <Route
                        path=path!("/pokemon/:id")
                        view=|| view! {
                            <Guarded access=AppRoute::Detail.access()>
                                <DetailPage />
                            </Guarded>
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
