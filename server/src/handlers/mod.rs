//! HTTP Handlers
//!
//! One module per gateway concern.

mod auth_handler;
mod pokemon_handler;

pub use auth_handler::*;
pub use pokemon_handler::*;
