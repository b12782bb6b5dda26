//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with sliding expiry.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A cached value paired with its last-access timestamp.
///
/// The value and its timestamp live in one entry so neither can outlive the
/// other; removing the entry removes both atomically.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored canonical string value
    pub value: String,
    /// Moment of the most recent write or successful read
    pub last_access: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry accessed now.
    pub fn new(value: String) -> Self {
        Self {
            value,
            last_access: Instant::now(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the sliding TTL.
    ///
    /// Expiry is measured from the last access, not from creation, so entries
    /// that keep being read stay alive while cold ones decay. An entry is
    /// expired only when strictly more than `ttl` has elapsed; a read landing
    /// exactly on the boundary still counts as fresh.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.last_access.elapsed() > ttl
    }

    // == Touch ==
    /// Resets the expiry clock to now.
    pub fn touch(&mut self) {
        self.last_access = Instant::now();
    }
}
