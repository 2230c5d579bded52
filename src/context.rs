//! Session Context
//!
//! The login flag, provided once at the app root via the Leptos Context API.
//! Components go through `use_session()` instead of touching localStorage.

use leptos::prelude::*;
use pokedex_domain::{Credentials, SessionFlag};

use crate::api;
use crate::storage::LocalStorageFlags;

#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current flag - read
    pub logged_in: ReadSignal<bool>,
    /// Current flag - write
    set_logged_in: WriteSignal<bool>,
}

fn session_flag() -> SessionFlag<LocalStorageFlags> {
    SessionFlag::new(LocalStorageFlags)
}

impl SessionContext {
    /// Seed the signal from the persisted flag
    pub fn new() -> Self {
        let (logged_in, set_logged_in) = signal(session_flag().is_logged_in());
        Self {
            logged_in,
            set_logged_in,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    /// Ask the gateway, then persist the outcome. Returns whether the user is
    /// now logged in.
    pub async fn login(&self, credentials: &Credentials) -> bool {
        let outcome = api::login(credentials).await;
        if let Err(e) = &outcome {
            web_sys::console::error_1(&format!("[Session] Login failed: {}", e).into());
        }
        let logged_in = session_flag().record_login_outcome(&outcome);
        self.set_logged_in.set(logged_in);
        logged_in
    }

    pub fn logout(&self) {
        session_flag().logout();
        self.set_logged_in.set(false);
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
