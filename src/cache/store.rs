//! Setting Cache Module
//!
//! Bounded in-memory accelerator with sliding-TTL expiry and
//! oldest-access eviction. Never a source of truth: the durable store
//! behind the manager always holds the authoritative value.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};

// == Setting Cache ==
/// Bounded sliding-TTL cache over canonical string values.
///
/// A single reader/writer lock guards the entry map. Lookups start under a
/// shared lock; any mutation (insert, delete, access-time refresh, sweep,
/// eviction) takes the exclusive lock. Lock sections never span I/O.
///
/// None of the operations can fail; the cache only distinguishes hit from
/// miss. Counters are kept outside the lock as atomics so the miss path for
/// absent keys stays on the shared lock.
#[derive(Debug)]
pub struct SettingCache {
    /// Key-value storage with per-entry last-access timestamps
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Maximum number of entries allowed, enforced at write time
    max_entries: usize,
    /// Sliding time-to-live measured from last access
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
    expirations: AtomicU64,
}

impl SettingCache {
    // == Constructor ==
    /// Creates a new cache with the given capacity and sliding TTL.
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            max_entries,
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
            expirations: AtomicU64::new(0),
        }
    }

    // == Get ==
    /// Looks up a fresh value, refreshing its expiry clock on a hit.
    ///
    /// An entry whose last access is older than the TTL is treated as absent:
    /// the call reports a miss and opportunistically removes the stale entry.
    /// Staleness is re-checked under the exclusive lock before removal so an
    /// entry a concurrent writer just refreshed is left alone. A read landing
    /// exactly at the TTL boundary may observe either outcome.
    pub fn get(&self, key: &str) -> Option<String> {
        // First pass under the shared lock: existence and staleness only.
        let stale = {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) => entry.is_expired(self.ttl),
                None => {
                    self.misses.fetch_add(1, Ordering::Relaxed);
                    return None;
                }
            }
        };

        if stale {
            // Re-acquire exclusively and double-check before removing; a
            // racing writer may have refreshed the entry in between.
            let mut entries = self.entries.write();
            if let Some(entry) = entries.get(key) {
                if entry.is_expired(self.ttl) {
                    entries.remove(key);
                    self.expirations.fetch_add(1, Ordering::Relaxed);
                    debug!(key, "cache entry expired");
                }
            }
            self.misses.fetch_add(1, Ordering::Relaxed);
            return None;
        }

        // Fresh path: the access-time refresh is a mutation, so take the
        // exclusive lock and re-verify the entry survived the lock gap.
        let mut entries = self.entries.write();
        match entries.get_mut(key) {
            Some(entry) if !entry.is_expired(self.ttl) => {
                entry.touch();
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.value.clone())
            }
            _ => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    // == Set ==
    /// Inserts or overwrites a value, accessed now.
    ///
    /// Before inserting, sweeps every expired entry. If the map is still at
    /// or above capacity, evicts exactly one entry: the one with the oldest
    /// last access (ties broken by iteration order). Single-victim eviction
    /// keeps each `set` at O(n) for a cache meant to stay small.
    pub fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write();

        self.sweep(&mut entries);

        if entries.len() >= self.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_access)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
                self.evictions.fetch_add(1, Ordering::Relaxed);
                debug!(key = %oldest, "evicted least recently used cache entry");
            }
        }

        entries.insert(key.to_string(), CacheEntry::new(value.to_string()));
    }

    // == Delete ==
    /// Removes an entry, value and access timestamp together.
    ///
    /// No-op when the key is absent.
    pub fn delete(&self, key: &str) {
        self.entries.write().remove(key);
    }

    // == Remove Expired ==
    /// Sweeps all expired entries and returns how many were removed.
    ///
    /// `set` runs this sweep on every call; exposing it lets a background
    /// task bound the resident garbage between writes as well.
    pub fn remove_expired(&self) -> usize {
        let mut entries = self.entries.write();
        self.sweep(&mut entries)
    }

    fn sweep(&self, entries: &mut HashMap<String, CacheEntry>) -> usize {
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(self.ttl));
        let removed = before - entries.len();
        if removed > 0 {
            self.expirations.fetch_add(removed as u64, Ordering::Relaxed);
        }
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the cache performance counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            expirations: self.expirations.load(Ordering::Relaxed),
            entries: self.entries.read().len(),
        }
    }

    // == Length ==
    /// Returns the current number of resident entries.
    ///
    /// Includes entries that are expired but not yet swept; expired entries
    /// are logically absent even while physically resident.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
