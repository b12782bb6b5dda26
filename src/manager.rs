//! Setting Manager Module
//!
//! The single entry point for typed configuration access. Mediates between
//! the codec, the bounded TTL cache, the durable store, and the optional
//! fallback source.
//!
//! Construct one manager at process wiring time and hand it (behind an
//! `Arc`) to every consumer; there is no hidden global and no init-once
//! latch, so tests and multiple configurations can coexist.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::{CacheStats, SettingCache};
use crate::codec::SettingValue;
use crate::config::CacheConfig;
use crate::error::Result;
use crate::fallback::FallbackSource;
use crate::store::SettingStore;

// == Setting Manager ==
/// Typed configuration accessor over a durable store with a bounded
/// sliding-TTL cache in front.
///
/// The store is the source of truth; the cache is a transient accelerator
/// whose staleness window is bounded by the configured TTL. The manager
/// holds no lock of its own; the cache guards its map internally and the
/// store owns its own discipline.
pub struct SettingManager {
    store: Arc<dyn SettingStore>,
    fallback: Option<Arc<dyn FallbackSource>>,
    cache: Arc<SettingCache>,
}

impl SettingManager {
    // == Constructors ==
    /// Creates a manager with the default cache configuration.
    pub fn new(store: Arc<dyn SettingStore>) -> Self {
        Self::with_config(store, CacheConfig::default())
    }

    /// Creates a manager with explicit cache tuning.
    pub fn with_config(store: Arc<dyn SettingStore>, config: CacheConfig) -> Self {
        Self {
            store,
            fallback: None,
            cache: Arc::new(SettingCache::new(config.max_entries, config.ttl)),
        }
    }

    /// Attaches a read-only fallback source, consulted only when the store
    /// reports a key as not found.
    pub fn with_fallback(mut self, fallback: Arc<dyn FallbackSource>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    // == Set ==
    /// Encodes a typed value and writes it through cache and store.
    ///
    /// The cache is updated first, unconditionally. If the store write then
    /// fails, the error is returned and the cache is left holding a value
    /// that was never durably committed: a read immediately after a failed
    /// write observes the attempted value until the TTL expires or the key
    /// is deleted. The ordering favors read-after-write consistency in the
    /// common success case over correctness in the rare partial failure.
    pub async fn set<V: SettingValue>(&self, key: &str, value: V) -> Result<()> {
        let encoded = value.encode()?;
        self.cache.set(key, &encoded);
        self.store.set(key, &encoded).await
    }

    // == Get ==
    /// Retrieves a setting and decodes it as `V`.
    pub async fn get<V: SettingValue>(&self, key: &str) -> Result<V> {
        let raw = self.get_raw(key).await?;
        V::decode(&raw)
    }

    // == Get Raw ==
    /// Retrieves a setting in its canonical string form.
    ///
    /// Read path: cache hit returns immediately without touching the store.
    /// On a miss the store is read and a hit is copied into the cache. When
    /// the store reports not-found, the fallback source is consulted; a
    /// fallback hit is persisted back through [`SettingManager::set`] so the
    /// key takes the fast path afterwards. Any other store error propagates
    /// unchanged. Flow is one-directional: get may call set, set never calls
    /// get.
    pub async fn get_raw(&self, key: &str) -> Result<String> {
        if let Some(value) = self.cache.get(key) {
            debug!(key, "cache hit");
            return Ok(value);
        }

        match self.store.get(key).await {
            Ok(value) => {
                debug!(key, "store hit, populating cache");
                self.cache.set(key, &value);
                Ok(value)
            }
            Err(err) if err.is_not_found() => match self.promote_fallback(key).await? {
                Some(value) => Ok(value),
                None => Err(err),
            },
            Err(err) => Err(err),
        }
    }

    /// Consults the fallback source and persists a hit back through `set`.
    async fn promote_fallback(&self, key: &str) -> Result<Option<String>> {
        let fallback = match &self.fallback {
            Some(fallback) => fallback,
            None => return Ok(None),
        };
        if !fallback.is_set(key) {
            return Ok(None);
        }
        match fallback.get(key) {
            Some(value) => {
                info!(key, "promoting fallback value into store");
                self.set(key, value.clone()).await?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    // == Must Get ==
    /// Retrieves a required setting, panicking if it is absent or cannot be
    /// decoded.
    ///
    /// Reserved for settings the calling code cannot run without; everything
    /// else should use [`SettingManager::get`] and handle the error.
    pub async fn must_get<V: SettingValue>(&self, key: &str) -> V {
        match self.get(key).await {
            Ok(value) => value,
            Err(err) => panic!("required setting {:?} unavailable: {}", key, err),
        }
    }

    // == Delete ==
    /// Removes a setting from the cache and the durable store.
    ///
    /// The cache entry goes first and is not restored if the store delete
    /// fails; a successful call leaves the key absent from both layers.
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.cache.delete(key);
        self.store.delete(key).await
    }

    // == Cache Access ==
    /// Returns a snapshot of the cache performance counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Returns a shared handle to the cache, e.g. for wiring the background
    /// sweep task.
    pub fn cache(&self) -> Arc<SettingCache> {
        Arc::clone(&self.cache)
    }
}
