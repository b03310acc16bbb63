//! Expiry Sweep Task
//!
//! Background task that periodically drops expired entries from every cache,
//! so collections nobody reads again do not linger until the next `get`.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Clock;
use crate::registry::CacheRegistry;

/// Spawns a background task that sweeps expired entries from the registry.
///
/// The task sleeps for `sweep_interval_secs` (at least one second) between
/// runs and takes each cache's write lock only for the duration of its sweep.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let caches = CacheRegistry::new(&CacheTtls::default())?;
/// let sweep_handle = spawn_sweep_task(caches.clone(), 60);
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task<C>(caches: CacheRegistry<C>, sweep_interval_secs: u64) -> JoinHandle<()>
where
    C: Clock + Clone + 'static,
{
    let interval = Duration::from_secs(sweep_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = caches.sweep_expired().await;

            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}
