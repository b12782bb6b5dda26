//! Typed Settings - configuration access with durable storage and caching
//!
//! Callers read and write typed settings through a [`SettingManager`]; values
//! travel as canonical strings through a bounded sliding-TTL cache into a
//! pluggable durable store, with an optional read-only fallback source
//! consulted on a store miss.

pub mod cache;
pub mod codec;
pub mod config;
pub mod error;
pub mod fallback;
pub mod manager;
pub mod store;
pub mod tasks;

pub use cache::{CacheStats, SettingCache};
pub use codec::{Json, SettingValue};
pub use config::CacheConfig;
pub use error::{Result, SettingError};
pub use fallback::{ConfigSource, FallbackSource};
pub use manager::SettingManager;
pub use store::{MemoryStore, SettingStore};
pub use tasks::spawn_sweep_task;
