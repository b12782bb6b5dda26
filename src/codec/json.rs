//! JSON Wrapper
//!
//! Opt-in structured serialization for values without a scalar canonical
//! form.

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::SettingValue;
use crate::error::{Result, SettingError};

// == Json Wrapper ==
/// Marks a value as stored in its JSON document form.
///
/// Any `Serialize + DeserializeOwned` type can pass through the settings
/// store by wrapping it:
///
/// ```ignore
/// manager.set("db.config", Json(DbConfig { host, port })).await?;
/// let Json(config) = manager.get::<Json<DbConfig>>("db.config").await?;
/// ```
///
/// The wrapper keeps structured dispatch explicit at the call site instead
/// of guessing from the value's shape at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consumes the wrapper, returning the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> SettingValue for Json<T>
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self) -> Result<String> {
        serde_json::to_string(&self.0).map_err(|err| {
            SettingError::Conversion(format!("cannot serialize value as JSON: {}", err))
        })
    }

    fn decode(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map(Json).map_err(|err| {
            SettingError::Conversion(format!("cannot parse {:?} as JSON: {}", raw, err))
        })
    }
}
