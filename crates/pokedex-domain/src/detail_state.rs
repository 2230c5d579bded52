//! Detail State Controller
//!
//! Single-entity counterpart of the list controller, keyed by the `:id`
//! route segment instead of a query parameter.

use crate::error::AppResult;
use crate::list_state::LoadState;
use crate::models::{DetailItem, PokemonDetail};
use crate::sequencer::RequestSequencer;

/// Shown for every failure. Not-found and server errors are not told apart
/// here; the gateway does distinguish them (404 vs 500).
pub const DETAIL_ERROR_MESSAGE: &str = "Could not load the Pokémon details.";

/// A detail fetch the caller must perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    pub seq: u64,
    pub id: String,
}

#[derive(Debug, Clone, Default)]
pub struct DetailController {
    id: Option<String>,
    state: LoadState,
    item: Option<DetailItem>,
    error: Option<String>,
    sequencer: RequestSequencer,
}

impl DetailController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive the requested id from the route. A blank segment never
    /// fetches; an unchanged id does not refetch.
    pub fn sync_from_route(&mut self, id_param: Option<&str>) -> Option<DetailTicket> {
        let id = id_param.map(str::trim).filter(|id| !id.is_empty())?;
        if self.id.as_deref() == Some(id) {
            return None;
        }

        self.id = Some(id.to_string());
        self.item = None;
        self.error = None;
        self.state = LoadState::Loading;
        Some(DetailTicket {
            seq: self.sequencer.issue(),
            id: id.to_string(),
        })
    }

    /// Land a fetch outcome; stale tickets are ignored.
    pub fn complete(&mut self, ticket: &DetailTicket, result: AppResult<PokemonDetail>) -> bool {
        if !self.sequencer.is_current(ticket.seq) {
            return false;
        }

        match result {
            Ok(detail) => {
                self.item = Some(DetailItem::from(detail));
                self.state = LoadState::Ready;
            }
            Err(_) => {
                self.item = None;
                self.error = Some(DETAIL_ERROR_MESSAGE.to_string());
                self.state = LoadState::Failed;
            }
        }
        true
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    pub fn item(&self) -> Option<&DetailItem> {
        self.item.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
