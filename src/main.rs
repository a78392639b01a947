//! Calculator Service - basic arithmetic over HTTP
//!
//! Parses untrusted query operands, dispatches to one of five pure
//! arithmetic operations, formats the result, and optionally memoizes
//! whole responses behind a TTL-bounded cache decorator.

mod api;
mod cache;
mod calc;
mod config;
mod error;
mod models;
mod tasks;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use cache::{MemoryCache, RedisCache};
use config::{CacheBackendKind, Config};
use tasks::spawn_cleanup_task;

/// Main entry point for the calculator service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the cache store client; with caching enabled, an unreachable
///    store is fatal - the process must not start claiming to cache
/// 4. Start the background TTL cleanup task (memory backend only)
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on the configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calc_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Calculator Service");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: caching_enabled={}, backend={:?}, ttl={}s, port={}",
        config.caching_enabled, config.cache_backend, config.cache_ttl, config.server_port
    );

    // Build the cache store and application state
    let mut cleanup_handle = None;
    let state = if config.caching_enabled {
        match config.cache_backend {
            CacheBackendKind::Memory => {
                let memory = MemoryCache::new(config.cache_ttl);
                cleanup_handle = Some(spawn_cleanup_task(memory.store(), config.cleanup_interval));
                info!("In-memory response cache initialized");
                AppState::with_cache(Arc::new(memory))
            }
            CacheBackendKind::Redis => {
                let redis =
                    RedisCache::connect(&config.cache_host, config.cache_port, config.cache_ttl)
                        .await
                        .with_context(|| {
                            format!(
                                "cannot reach cache store at {}:{}; refusing to start with caching enabled",
                                config.cache_host, config.cache_port
                            )
                        })?;
                info!(
                    "Connected to cache store at {}:{}",
                    config.cache_host, config.cache_port
                );
                AppState::with_cache(Arc::new(redis))
            }
        }
    } else {
        info!("Response caching disabled");
        AppState::disabled()
    };

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to the configured port on all interfaces
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
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

    // Abort the cleanup task
    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
