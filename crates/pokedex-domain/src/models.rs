//! Catalogue Models
//!
//! Raw upstream payloads and the reshaped records the views render.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Where the official artwork for a given id lives
pub const ARTWORK_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/";

/// Number of moves surfaced on the detail view
pub const MOVES_SHOWN: usize = 10;

// ========================
// List payloads
// ========================

/// One `{name, url}` pair as returned by the upstream list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawListEntry {
    pub name: String,
    pub url: String,
}

/// Upstream list page, passed through the gateway unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamPage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<RawListEntry>,
}

/// A catalogue grid entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: u32,
    pub name: String,
    pub image_url: String,
}

impl ListItem {
    /// Build a grid entry from a raw list pair. The list endpoint carries no
    /// ids, so the id always comes from the canonical URL.
    pub fn from_entry(entry: &RawListEntry) -> AppResult<Self> {
        let id = extract_id(&entry.url).ok_or_else(|| {
            AppError::ClientFetch(format!("no id in list entry url {}", entry.url))
        })?;
        Ok(Self {
            id,
            name: entry.name.clone(),
            image_url: artwork_url(id),
        })
    }

    /// Zero-padded catalogue number, e.g. `#025`
    pub fn display_number(&self) -> String {
        format!("#{:03}", self.id)
    }
}

/// Last non-empty path segment of `url`, as a positive integer.
///
/// `https://pokeapi.co/api/v2/pokemon/25/` yields `25`.
pub fn extract_id(url: &str) -> Option<u32> {
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .last()?
        .parse::<u32>()
        .ok()
        .filter(|id| *id > 0)
}

pub fn artwork_url(id: u32) -> String {
    format!("{}{}.png", ARTWORK_BASE_URL, id)
}

/// One successful list fetch, reshaped
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    pub items: Vec<ListItem>,
    pub total_count: u64,
}

impl PageResult {
    /// A single malformed entry fails the whole page.
    pub fn from_upstream(page: UpstreamPage) -> AppResult<Self> {
        let items = page
            .results
            .iter()
            .map(ListItem::from_entry)
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Self {
            items,
            total_count: page.count,
        })
    }
}

// ========================
// Detail payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

/// The gateway's detail projection: exactly these eight fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub abilities: Vec<AbilitySlot>,
    pub moves: Vec<MoveSlot>,
    pub forms: Vec<NamedResource>,
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    pub height: u32,
    pub weight: u32,
}

/// Detail record as rendered
#[derive(Debug, Clone, PartialEq)]
pub struct DetailItem {
    pub id: u32,
    pub name: String,
    pub height_decimetres: u32,
    pub weight_decigrams: u32,
    pub abilities: Vec<String>,
    /// First `MOVES_SHOWN` moves, upstream order
    pub moves: Vec<String>,
    pub total_moves: usize,
    pub forms: Vec<String>,
    pub artwork_url: String,
}

impl DetailItem {
    pub fn display_number(&self) -> String {
        format!("#{:03}", self.id)
    }

    pub fn height_metres(&self) -> f64 {
        f64::from(self.height_decimetres) / 10.0
    }

    pub fn weight_kilograms(&self) -> f64 {
        f64::from(self.weight_decigrams) / 10.0
    }

    /// Moves not surfaced in `moves`
    pub fn hidden_moves(&self) -> usize {
        self.total_moves.saturating_sub(self.moves.len())
    }
}

impl From<PokemonDetail> for DetailItem {
    fn from(detail: PokemonDetail) -> Self {
        let artwork_url = detail
            .sprites
            .other
            .official_artwork
            .and_then(|art| art.front_default)
            .or(detail.sprites.front_default)
            .unwrap_or_else(|| artwork_url(detail.id));
        let total_moves = detail.moves.len();

        Self {
            id: detail.id,
            name: detail.name,
            height_decimetres: detail.height,
            weight_decigrams: detail.weight,
            abilities: detail.abilities.into_iter().map(|a| a.ability.name).collect(),
            moves: detail
                .moves
                .into_iter()
                .take(MOVES_SHOWN)
                .map(|m| m.move_ref.name)
                .collect(),
            total_moves,
            forms: detail.forms.into_iter().map(|f| f.name).collect(),
            artwork_url,
        }
    }
}
