//! Codec Module
//!
//! Round-trips typed values through the canonical string representation
//! shared by the cache and the durable store.
//!
//! Each supported type carries its own encoder/decoder pair through the
//! [`SettingValue`] trait, resolved at compile time. Structured values opt in
//! through the [`Json`] wrapper.

mod json;
mod value;

// Re-export public types
pub use json::Json;
pub use value::SettingValue;
