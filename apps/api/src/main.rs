mod config;
mod errors;
mod models;
mod render;
mod routes;
mod state;
mod styles;
mod templates;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::styles::kv::FileKvStore;
use crate::styles::store::StyleStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Persona Styles API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the file-backed saved-styles store
    let kv = FileKvStore::new(&config.styles_dir)?;
    let styles = Arc::new(Mutex::new(StyleStore::new(kv)));
    info!("Styles store at {}", config.styles_dir.display());

    // Build app state
    let state = AppState {
        config: config.clone(),
        styles,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
