//! Pokédex Domain Layer
//!
//! Everything the catalogue UI and the gateway agree on, kept free of
//! browser and server dependencies so it can be tested natively:
//! - models: list/detail records and their reshaping from upstream payloads
//! - pagination: page math and navigation requests
//! - list_state / detail_state: view controllers driven by the URL
//! - route_guard / session: login gating over a persisted flag

mod error;
mod models;
mod pagination;
mod sequencer;
mod list_state;
mod detail_state;
mod route_guard;
mod session;
mod wire;

pub use error::{AppError, AppResult};
pub use models::{
    artwork_url, extract_id, AbilitySlot, DetailItem, ListItem, MoveSlot, NamedResource,
    PageResult, PokemonDetail, RawListEntry, Sprites, UpstreamPage, ARTWORK_BASE_URL,
    MOVES_SHOWN,
};
pub use pagination::{
    offset_for, page_query, page_window, parse_page_param, total_pages, PageRequest, PAGE_SIZE,
};
pub use sequencer::RequestSequencer;
pub use list_state::{FetchTicket, ListController, LoadState, SortOrder, LIST_ERROR_MESSAGE};
pub use detail_state::{DetailController, DetailTicket, DETAIL_ERROR_MESSAGE};
pub use route_guard::{AppRoute, GuardDecision, RouteAccess, CATALOGUE_PATH, LOGIN_PATH};
pub use session::{
    Credentials, FlagStore, MemoryFlagStore, SessionFlag, LOGIN_FAILED_MESSAGE, SESSION_KEY,
    SESSION_VALUE, VALIDATION_MESSAGE,
};
pub use wire::{ApiMessage, LoginRequest};
