//! Expiry Sweep Task
//!
//! Background task that periodically removes expired entries from every
//! registered cache instance.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::registry::CacheRegistry;

/// Spawns a background task that periodically purges expired entries.
///
/// Each cycle snapshots the registry's store handles, then purges one
/// store at a time so no store's lock is held while another is swept.
/// Expired entries are also treated as absent on read, so the sweep only
/// reclaims memory earlier; correctness does not depend on it.
///
/// # Arguments
/// * `registry` - Shared registry whose instances are swept
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(
    registry: Arc<CacheRegistry>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            let handles = registry.handles().await;
            let swept = handles.len();

            let mut removed = 0;
            for store in handles {
                removed += store.write().await.purge_expired();
            }

            if removed > 0 {
                info!(
                    "Expiry sweep: removed {} expired entries across {} caches",
                    removed, swept
                );
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}
