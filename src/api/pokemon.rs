//! Catalogue Bindings

use pokedex_domain::{AppError, PokemonDetail, UpstreamPage};

use super::{endpoint, read_json, transport_error};

/// `GET /pokemons?limit=&offset=`
pub async fn list_pokemons(limit: u32, offset: u32) -> Result<UpstreamPage, AppError> {
    let response = reqwest::Client::new()
        .get(endpoint("/pokemons"))
        .query(&[("limit", limit), ("offset", offset)])
        .send()
        .await
        .map_err(transport_error)?;
    read_json(response).await
}

/// `GET /pokemons/{id}`
pub async fn get_pokemon(id: &str) -> Result<PokemonDetail, AppError> {
    let response = reqwest::Client::new()
        .get(endpoint(&format!("/pokemons/{}", id)))
        .send()
        .await
        .map_err(transport_error)?;
    read_json(response).await
}
