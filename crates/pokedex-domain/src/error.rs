//! Domain Errors
//!
//! One taxonomy for every failure the catalogue can surface. The gateway maps
//! its own failures onto HTTP statuses; the UI maps those statuses back here.

use thiserror::Error;

/// Common result type for domain operations
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Input rejected before any network call
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    /// Gateway could not get a usable answer from the upstream API
    #[error("Upstream failure")]
    Upstream,

    /// Anything else that went wrong on the client side (transport, decoding)
    #[error("Request failed: {0}")]
    ClientFetch(String),
}

impl AppError {
    /// Map a non-success gateway status onto the taxonomy.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => AppError::Unauthorized,
            404 => AppError::NotFound,
            _ => AppError::Upstream,
        }
    }
}
