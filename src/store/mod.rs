//! Store Module
//!
//! The durable storage contract consumed by the manager, plus the
//! in-memory reference backend.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::Result;

// == Setting Store ==
/// Contract for the durable key/value backend.
///
/// The store is the source of truth; the cache in front of it is only an
/// accelerator. Implementations must report a missing key as
/// [`crate::SettingError::NotFound`]; the manager depends on telling that
/// apart from a real storage failure, which belongs in
/// [`crate::SettingError::Storage`].
///
/// Implementations own their locking and I/O discipline; the manager imposes
/// no timeout, so callers needing bounded latency wrap calls themselves.
#[async_trait]
pub trait SettingStore: Send + Sync {
    /// Retrieves the canonical string value for a key.
    async fn get(&self, key: &str) -> Result<String>;

    /// Durably writes the canonical string value for a key.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Durably removes a key.
    async fn delete(&self, key: &str) -> Result<()>;
}
