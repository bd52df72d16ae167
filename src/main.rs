//! Sample Provider - A cache-aside item lookup service
//!
//! Serves `GET /sample/{id}`, consulting a cache before the backing document
//! store and populating the cache on a miss.

mod api;
mod clients;
mod config;
mod error;
mod lookup;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use clients::{InMemoryCache, InMemoryStore};
use config::{Config, ProviderMode};
use lookup::ItemLookupService;
use models::Item;

/// Main entry point for the sample provider.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables and validate it
/// 3. Wire the cache and document store collaborators (seeded in contract mode)
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sample_provider=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sample Provider");

    // Load and validate configuration, failing fast on missing settings
    let config = Config::from_env();
    config.validate()?;
    info!(
        "Configuration loaded: mode={:?}, port={}",
        config.mode, config.server_port
    );

    // Wire collaborators. This sample ships in-memory stand-ins for the
    // cache and document store; contract mode seeds the recorded fixture
    // item so the provider can answer the verification requests.
    let cache = Arc::new(InMemoryCache::new());
    let store = Arc::new(InMemoryStore::new());
    if config.mode == ProviderMode::Contract {
        store.insert(Item::new("27", "burger", "food")).await;
        info!("Contract mode: seeded in-memory store with fixture item");
    } else {
        warn!("Live mode uses in-memory collaborators; the store starts empty");
    }

    let service = ItemLookupService::new(cache, store);
    let state = AppState::new(service);

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
