//! Pokédex Gateway
//!
//! Thin backend in front of PokeAPI. Three endpoints under `/api`:
//! - `POST /login`: placeholder credential check
//! - `GET /pokemons`: paginated list, passed through unchanged
//! - `GET /pokemons/{id}`: detail record narrowed to a fixed projection
//!
//! Layers:
//! - upstream: the external API behind the `PokemonSource` trait
//! - projection: detail narrowing
//! - handlers: axum handlers, error mapping and logging

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod projection;
pub mod state;
pub mod upstream;


use config::Config;
use error::ServerError;
use handlers::{list_pokemons_handler, login_handler, pokemon_detail_handler};
use state::AppState;
use upstream::PokeApiClient;

const BANNER: &str = "Pokémon API gateway running.";

/// Full route table. The SPA is served from another origin, hence CORS.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let api = Router::new()
        .route("/login", post(login_handler))
        .route("/pokemons", get(list_pokemons_handler))
        .route("/pokemons/{id}", get(pokemon_detail_handler));

    Router::new()
        .route("/", get(|| async { BANNER }))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() -> Result<(), ServerError> {
    logging::init();

    info!("Loading configuration...");
    let config = Config::load()?;

    let source = PokeApiClient::new(config.upstream_base_url.clone(), config.upstream_timeout)?;
    let state = AppState::new(Arc::new(source));
    info!("Proxying {}", config.upstream_base_url);

    let app = build_router(state);

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Backend server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
