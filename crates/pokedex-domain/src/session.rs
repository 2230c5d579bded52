//! Session Flag
//!
//! The only client-side auth state: one boolean kept in a durable key-value
//! store so a reload stays logged in. This is a placeholder gate for a demo,
//! not authentication.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{AppError, AppResult};

/// Storage key for the flag
pub const SESSION_KEY: &str = "pokemon-user-logged-in";
/// Stored value while logged in; the key is absent otherwise
pub const SESSION_VALUE: &str = "true";

pub const VALIDATION_MESSAGE: &str = "Username and password are required.";
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid credentials. (Hint: admin/admin)";

/// Durable string key-value store (browser localStorage in the UI)
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryFlagStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Read/write access to the persisted login flag
#[derive(Debug, Clone)]
pub struct SessionFlag<S: FlagStore> {
    store: S,
}

impl<S: FlagStore> SessionFlag<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.get(SESSION_KEY).as_deref() == Some(SESSION_VALUE)
    }

    pub fn login(&self) {
        self.store.set(SESSION_KEY, SESSION_VALUE);
    }

    pub fn logout(&self) {
        self.store.remove(SESSION_KEY);
    }

    /// Persist the result of a login call. Only an explicit success sets the
    /// flag; a rejected or failed attempt clears it. Returns the new value.
    pub fn record_login_outcome(&self, outcome: &AppResult<bool>) -> bool {
        match outcome {
            Ok(true) => {
                self.login();
                true
            }
            _ => {
                self.logout();
                false
            }
        }
    }
}

/// Login form input that passed the empty-field check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Reject empty fields before any network call.
    pub fn validate(username: &str, password: &str) -> AppResult<Self> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::Validation(VALIDATION_MESSAGE.to_string()));
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}
