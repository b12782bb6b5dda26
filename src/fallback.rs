//! Fallback Source Module
//!
//! Read-only secondary origin consulted when the durable store reports a
//! key as not found. Typically backed by a layered configuration-file and
//! environment reader; once a key is served from here the manager persists
//! it back so later reads take the fast path.

use tracing::debug;

// == Fallback Source ==
/// Read-only key/value source of last resort.
///
/// Only consulted on a durable-store miss, never written to.
pub trait FallbackSource: Send + Sync {
    /// Reports whether the source knows the key.
    fn is_set(&self, key: &str) -> bool;

    /// Returns the canonical string value for a key, if present.
    fn get(&self, key: &str) -> Option<String>;
}

// == Config Source ==
/// [`FallbackSource`] over a built [`config::Config`].
///
/// Scalar values coerce to their canonical string form; structured values
/// (tables, arrays) come back as JSON documents, which the typed API decodes
/// through the [`crate::codec::Json`] wrapper.
pub struct ConfigSource {
    settings: config::Config,
}

impl ConfigSource {
    // == Constructor ==
    /// Wraps an already-built configuration.
    ///
    /// Layering (defaults, files, environment) is decided by whoever builds
    /// the [`config::Config`]; this adapter only reads from it.
    pub fn new(settings: config::Config) -> Self {
        Self { settings }
    }
}

impl FallbackSource for ConfigSource {
    fn is_set(&self, key: &str) -> bool {
        self.settings.get::<serde_json::Value>(key).is_ok()
    }

    fn get(&self, key: &str) -> Option<String> {
        if let Ok(text) = self.settings.get_string(key) {
            return Some(text);
        }
        // Tables and arrays refuse the string coercion; fall through to
        // their JSON document form.
        let value = self.settings.get::<serde_json::Value>(key).ok()?;
        debug!(key, "fallback value is structured, encoding as JSON");
        Some(value.to_string())
    }
}
