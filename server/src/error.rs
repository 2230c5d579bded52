//! Gateway Errors
//!
//! `GatewayError` is everything a caller may see. Upstream causes are logged
//! where they happen and collapsed into one of three responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pokedex_domain::ApiMessage;
use thiserror::Error;

use crate::config::ConfigError;
use crate::upstream::UpstreamError;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid credentials.")]
    Unauthorized,

    #[error("Pokémon not found.")]
    NotFound,

    #[error("Server error while contacting PokeAPI.")]
    Upstream,
}

impl From<UpstreamError> for GatewayError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::NotFound => GatewayError::NotFound,
            _ => GatewayError::Upstream,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match self {
            GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
            GatewayError::NotFound => StatusCode::NOT_FOUND,
            GatewayError::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ApiMessage::failure(self.to_string()))).into_response()
    }
}

/// Startup failures
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not build upstream client: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
