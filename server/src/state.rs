use std::sync::Arc;

use crate::upstream::PokemonSource;

/// Shared by every handler. Holds no per-request state.
pub struct AppState {
    pub source: Arc<dyn PokemonSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn PokemonSource>) -> Arc<Self> {
        Arc::new(Self { source })
    }
}
