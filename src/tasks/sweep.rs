//! Cache Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! Expiry is already enforced lazily (at read time per key and with a full
//! sweep on every write), so this task changes nothing observable. It only
//! bounds how long expired entries stay physically resident in a process
//! that goes quiet between writes.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SettingCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// # Arguments
/// * `cache` - Shared cache handle, from [`crate::SettingManager::cache`]
/// * `every` - Interval between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task; abort it during shutdown.
pub fn spawn_sweep_task(cache: Arc<SettingCache>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(interval_secs = every.as_secs(), "starting cache sweep task");

        loop {
            tokio::time::sleep(every).await;

            let removed = cache.remove_expired();
            if removed > 0 {
                info!(removed, "cache sweep removed expired entries");
            } else {
                debug!("cache sweep found no expired entries");
            }
        }
    })
}
