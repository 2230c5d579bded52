//! Login Page
//!
//! Empty fields are rejected locally; only complete forms reach the gateway.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use pokedex_domain::{AppError, Credentials, CATALOGUE_PATH, LOGIN_FAILED_MESSAGE};

use crate::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = StoredValue::new(use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let credentials = match Credentials::validate(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(AppError::Validation(message)) => {
                error.set(Some(message));
                return;
            }
            Err(_) => return,
        };

        submitting.set(true);
        spawn_local(async move {
            if session.login(&credentials).await {
                navigate.with_value(|nav| nav(CATALOGUE_PATH, NavigateOptions::default()));
            } else {
                error.set(Some(LOGIN_FAILED_MESSAGE.to_string()));
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h2>"Pokémon App Login"</h2>

                {move || error.get().map(|message| view! {
                    <div class="alert error">{message}</div>
                })}

                <label for="login-username">"Username"</label>
                <input
                    id="login-username"
                    type="text"
                    placeholder="admin"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />

                <label for="login-password">"Password"</label>
                <input
                    id="login-password"
                    type="password"
                    placeholder="admin"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />

                <button type="submit" disabled=move || submitting.get()>
                    "Sign in"
                </button>
            </form>
        </div>
    }
}
