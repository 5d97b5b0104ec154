//! Notes API server.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host address (default: `0.0.0.0`)
//! - `PORT`: Server port (default: `3002`)
//! - `RUST_LOG`: Logging level (e.g., `debug`, `info`, `notes_api=debug`)

use notes_api::api::{AppState, create_router};
use notes_api::config::ServerConfig;
use notes_api::infrastructure::InMemoryNoteRepository;
use notes_api::server::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    tracing::info!("Starting Notes API");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "Configuration error");
            std::process::exit(1);
        }
    };

    tracing::info!(host = %config.host, port = config.port, "Server configuration loaded");

    let state = AppState::new(InMemoryNoteRepository::new());
    let router = create_router(state);

    if let Err(error) = Server::new(config).run(router).await {
        tracing::error!(error = %error, "Server error");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("notes_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
