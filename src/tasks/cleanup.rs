//! Expiry Sweep Task
//!
//! Background task that periodically removes idle-expired cache entries.
//! Lookups already treat expired entries as absent; the sweep only reclaims
//! memory held by entries nobody asks for again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::EmployeeCache;

/// Spawns a background task that sweeps expired entries every `interval`.
///
/// The write lock is held only for the duration of a single sweep. The
/// returned handle is aborted during graceful shutdown.
pub fn spawn_cleanup_task(cache: Arc<RwLock<EmployeeCache>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting cache expiry sweep with interval of {} ms",
            interval.as_millis()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}
