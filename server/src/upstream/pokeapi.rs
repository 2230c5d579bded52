//! PokeAPI Client
//!
//! reqwest-backed `PokemonSource`. No retries; timeouts come from the
//! configured client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use super::{ListQuery, PokemonSource, UpstreamError};

pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PokeApiClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// Base URL with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::Malformed(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, UpstreamError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound);
        }
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl PokemonSource for PokeApiClient {
    async fn list(&self, query: &ListQuery) -> Result<Value, UpstreamError> {
        let mut request = self.http.get(self.endpoint(&["pokemon"])?);
        if let Some(limit) = &query.limit {
            request = request.query(&[("limit", limit)]);
        }
        if let Some(offset) = &query.offset {
            request = request.query(&[("offset", offset)]);
        }

        debug!(?query, "GET upstream pokemon list");
        let response = request.send().await?;
        Self::read_json(response).await
    }

    async fn detail(&self, id: &str) -> Result<Value, UpstreamError> {
        let url = self.endpoint(&["pokemon", id])?;
        debug!(%url, "GET upstream pokemon detail");
        let response = self.http.get(url).send().await?;
        Self::read_json(response).await
    }
}
