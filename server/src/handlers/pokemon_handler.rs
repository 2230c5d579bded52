//! Catalogue Handlers
//!
//! List is a passthrough; detail is narrowed to the projection. Upstream
//! causes are logged here and never reach the caller.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use tracing::{error, warn};

use crate::error::GatewayError;
use crate::projection::project_detail;
use crate::state::AppState;
use crate::upstream::{ListQuery, UpstreamError};

/// `GET /api/pokemons?limit=&offset=`
pub async fn list_pokemons_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, GatewayError> {
    let body = state.source.list(&query).await.map_err(|e| {
        error!(?query, "Failed to fetch pokémon list: {e}");
        GatewayError::Upstream
    })?;
    Ok(Json(body))
}

/// `GET /api/pokemons/{id}`
pub async fn pokemon_detail_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, GatewayError> {
    let detail = state
        .source
        .detail(&id)
        .await
        .and_then(project_detail)
        .map_err(|e| {
            match &e {
                UpstreamError::NotFound => warn!(%id, "Pokémon not found upstream"),
                _ => error!(%id, "Failed to fetch pokémon detail: {e}"),
            }
            GatewayError::from(e)
        })?;
    Ok(Json(detail))
}
