//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired entries out of the
//! in-memory response store. The Redis backend needs no sweeping: entry
//! expiry there is owned by the store itself.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ResponseStore;

/// Spawns a background task that periodically removes expired entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It acquires a write lock on the store for each sweep.
///
/// # Arguments
/// * `store` - shared handle to the in-memory response store
/// * `cleanup_interval_secs` - interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(
    store: Arc<RwLock<ResponseStore>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and sweep expired entries
            let removed = {
                let mut store_guard = store.write().await;
                store_guard.cleanup_expired()
            };

            // Log sweep statistics
            if removed > 0 {
                info!("TTL cleanup: removed {} expired responses", removed);
            } else {
                debug!("TTL cleanup: no expired responses found");
            }
        }
    })
}
