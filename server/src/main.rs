//! Pokédex gateway binary

#[tokio::main]
async fn main() {
    if let Err(e) = pokedex_server::start_server().await {
        eprintln!("pokedex-server failed: {e}");
        std::process::exit(1);
    }
}
