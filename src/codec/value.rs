//! Setting Value Trait
//!
//! Defines the canonical string encoding for every supported scalar type.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::error::{Result, SettingError};

// == Setting Value ==
/// A value that can round-trip through the canonical string form used by
/// the cache and the durable store.
///
/// Canonical forms:
/// - text: the text itself, unchanged
/// - integers: base-10 decimal digits
/// - floats: shortest decimal representation that round-trips at the
///   type's precision
/// - booleans: `true` / `false`
/// - timestamps: RFC 3339
/// - durations: humantime text such as `1h 30m`
///
/// Structured values implement this through the [`crate::codec::Json`]
/// wrapper instead.
pub trait SettingValue: Sized {
    /// Encodes the value into its canonical string form.
    fn encode(&self) -> Result<String>;

    /// Decodes a value from its canonical string form.
    ///
    /// Fails with [`SettingError::Conversion`] when the string cannot be
    /// interpreted as `Self`; never panics, never silently coerces.
    fn decode(raw: &str) -> Result<Self>;
}

// == Text ==
impl SettingValue for String {
    fn encode(&self) -> Result<String> {
        Ok(self.clone())
    }

    fn decode(raw: &str) -> Result<Self> {
        Ok(raw.to_string())
    }
}

// == Scalars ==
// Integers, floats and booleans all encode through Display and decode
// through FromStr. Float Display emits the shortest decimal form that
// parses back to the same bits, which is exactly the canonical form.
macro_rules! impl_scalar_setting_value {
    ($($t:ty),* $(,)?) => {$(
        impl SettingValue for $t {
            fn encode(&self) -> Result<String> {
                Ok(self.to_string())
            }

            fn decode(raw: &str) -> Result<Self> {
                raw.parse::<$t>().map_err(|err| {
                    SettingError::Conversion(format!(
                        "cannot parse {:?} as {}: {}",
                        raw,
                        stringify!($t),
                        err
                    ))
                })
            }
        }
    )*};
}

impl_scalar_setting_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
);

// == Timestamps ==
impl SettingValue for DateTime<Utc> {
    fn encode(&self) -> Result<String> {
        Ok(self.to_rfc3339())
    }

    fn decode(raw: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|err| {
                SettingError::Conversion(format!(
                    "cannot parse {:?} as an RFC 3339 timestamp: {}",
                    raw, err
                ))
            })
    }
}

// == Durations ==
impl SettingValue for Duration {
    fn encode(&self) -> Result<String> {
        Ok(humantime::format_duration(*self).to_string())
    }

    fn decode(raw: &str) -> Result<Self> {
        humantime::parse_duration(raw).map_err(|err| {
            SettingError::Conversion(format!("cannot parse {:?} as a duration: {}", raw, err))
        })
    }
}
