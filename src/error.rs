//! Error types for the settings store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Setting Error Enum ==
/// Unified error type for the settings store.
///
/// The cache layer never produces errors (it only reports hit/miss); every
/// variant here originates in the codec, the durable store, or the fallback
/// source.
#[derive(Error, Debug)]
pub enum SettingError {
    /// Key absent from both the durable store and the fallback source
    #[error("setting key not found: {0}")]
    NotFound(String),

    /// Stored string could not be decoded as the requested type
    #[error("type conversion failed: {0}")]
    Conversion(String),

    /// Underlying store or fallback I/O failure, opaque to the core
    #[error("storage operation failed: {0}")]
    Storage(#[from] anyhow::Error),
}

impl SettingError {
    // == Not Found Predicate ==
    /// Returns true if this error is the distinguished "not found" condition.
    ///
    /// The manager relies on this to tell a missing key apart from a real
    /// storage failure when deciding whether to consult the fallback source.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SettingError::NotFound(_))
    }
}

// == Result Type Alias ==
/// Convenience Result type for the settings store.
pub type Result<T> = std::result::Result<T, SettingError>;
