//! UI Components
//!
//! Reusable Leptos components.

mod guard;
mod pagination_bar;
mod pokemon_card;

pub use guard::Guarded;
pub use pagination_bar::PaginationBar;
pub use pokemon_card::PokemonCard;
