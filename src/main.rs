//! Print Queue - printing case API
//!
//! Lists cases waiting to be printed and records printed batches,
//! behind a shared-secret bearer key.

use std::sync::Arc;

use tokio::net::TcpListener;

mod api;
mod auth;
mod config;
mod domain;
mod error;
mod logging;
mod storage;

use crate::api::build_router;
use crate::auth::ApiKeyGate;
use crate::config::Config;
use crate::storage::{CaseStore, InMemoryCaseStore};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Case store backing the printing routes.
    pub store: Arc<dyn CaseStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    // Logging needs the configured format, so a bad config is reported on stderr
    let config = Config::load().map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    logging::init(config.logging.format);

    tracing::info!("Starting Print Queue v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        path_prefix = %config.server.path_prefix,
        seed_sample = config.store.seed_sample,
        log_format = ?config.logging.format,
        "Configuration loaded"
    );

    let store = if config.store.seed_sample {
        InMemoryCaseStore::with_sample_case()
    } else {
        InMemoryCaseStore::default()
    };

    let state = AppState {
        store: Arc::new(store),
    };
    let gate = ApiKeyGate::new(&config.auth.api_key);

    let app = build_router(state, gate, &config.server.path_prefix);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
