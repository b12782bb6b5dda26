//! Configuration Module
//!
//! Handles cache tuning parameters, loadable from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::{DEFAULT_MAX_ENTRIES, DEFAULT_TTL};

/// Cache tuning parameters for a [`crate::SettingManager`].
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Sliding time-to-live measured from each entry's last access
    pub ttl: Duration,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SETTINGS_CACHE_MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `SETTINGS_CACHE_TTL_SECS` - Sliding TTL in seconds (default: 3600)
    pub fn from_env() -> Self {
        Self {
            max_entries: env::var("SETTINGS_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_ENTRIES),
            ttl: env::var("SETTINGS_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TTL),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            ttl: DEFAULT_TTL,
        }
    }
}
