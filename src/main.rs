//! ttl_kv - An in-memory key-value server
//!
//! Serves the key-value HTTP API and runs the background expiration sweeper.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttl_kv::api::create_router;
use ttl_kv::cache::CacheStore;
use ttl_kv::{spawn_cleanup_task, AppState, Config};

/// Main entry point for the key-value server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the store and start the expiration sweeper
/// 4. Serve the HTTP API until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttl_kv=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ttl_kv server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, cleanup_interval={}s, sweep_batch_size={}",
        config.server_port, config.cleanup_interval, config.sweep_batch_size
    );

    let state = AppState::new(CacheStore::new());

    let cleanup_handle = spawn_cleanup_task(
        state.cache.clone(),
        config.cleanup_interval,
        config.sweep_batch_size,
    );
    info!("Background cleanup task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then aborts the sweeper.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
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

    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
