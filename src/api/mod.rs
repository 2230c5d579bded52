//! Gateway Bindings
//!
//! HTTP wrappers around the backend's `/api` endpoints, organized by domain.
//! Every call returns the domain error taxonomy; non-2xx statuses are mapped
//! with `AppError::from_status`.

mod auth;
mod pokemon;

use pokedex_domain::AppError;
use serde::de::DeserializeOwned;

pub use auth::*;
pub use pokemon::*;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";

/// Gateway base URL, overridable at build time with `POKEDEX_API_URL`
pub fn api_base_url() -> &'static str {
    option_env!("POKEDEX_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

fn endpoint(path: &str) -> String {
    format!("{}{}", api_base_url().trim_end_matches('/'), path)
}

fn transport_error(e: reqwest::Error) -> AppError {
    AppError::ClientFetch(e.to_string())
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::from_status(status.as_u16()));
    }
    response.json::<T>().await.map_err(transport_error)
}
