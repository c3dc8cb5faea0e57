//! TTL Sweep Task
//!
//! Background task that periodically removes expired store entries.
//! Lazy read-side deletion already keeps served state correct; the
//! sweep bounds memory when nothing reads an expired entry.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TtlStore;

/// Spawns a background task that periodically purges expired entries.
///
/// The task runs in an infinite loop, sleeping for the specified
/// interval between sweeps. It acquires a write lock on the store to
/// remove expired entries.
///
/// # Arguments
/// * `store` - Shared reference to the store
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the
/// task during graceful shutdown.
pub fn spawn_sweep_task<V>(
    store: Arc<RwLock<TtlStore<V>>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and purge expired entries
            let removed = {
                let mut store_guard = store.write().await;
                store_guard.purge_expired()
            };

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
