//! Upstream API
//!
//! The external catalogue service the gateway proxies. Handlers only see the
//! `PokemonSource` trait so tests can swap in a fake.

mod pokeapi;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub use pokeapi::PokeApiClient;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream returned 404")]
    NotFound,

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed upstream body: {0}")]
    Malformed(String),
}

/// `limit`/`offset` exactly as received; absent values are not forwarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// One page of `{count, next, previous, results}`
    async fn list(&self, query: &ListQuery) -> Result<Value, UpstreamError>;

    /// Full upstream record for one id or name
    async fn detail(&self, id: &str) -> Result<Value, UpstreamError>;
}
