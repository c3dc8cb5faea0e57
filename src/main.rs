//! News Digest - a single-slot news digest cache server
//!
//! Ingests externally produced news digests and serves the most recent
//! valid one until it expires.

mod api;
mod cache;
mod config;
mod digest;
mod error;
mod models;
mod tasks;

use std::net::SocketAddr;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use tasks::spawn_sweep_task;

/// Main entry point for the digest server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the digest store with the configured TTL
/// 4. Start the background TTL sweep task
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "news_digest=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting News Digest Server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: ttl={}s, port={}, sweep_interval={}s, strict_validation={}",
        config.ttl_secs, config.server_port, config.sweep_interval, config.strict_validation
    );

    // Create application state with the digest store
    let state = AppState::from_config(&config);
    info!("Digest store initialized");

    // Start background sweep task
    let sweep_handle = spawn_sweep_task(state.store.clone(), config.sweep_interval);
    info!("Background sweep task started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweep_handle))
        .await
        .unwrap();

    info!("Server shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep task and allows graceful shutdown.
async fn shutdown_signal(sweep_handle: tokio::task::JoinHandle<()>) {
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

    // Abort the sweep task
    sweep_handle.abort();
    warn!("Sweep task aborted");
}
