//! Layered configuration store.
//!
//! The persistent layer is a map from [`PropertyKey`] to an optional string.
//! A key may be present with a null value, which is treated the same as an
//! absent key when overrides are merged in.
//!
//! # Configuration file
//!
//! ```toml
//! "fs.swift.user" = "admin"
//! "fs.swift.tenant" = "analytics"
//! "fs.swift.auth.url" = "https://keystone.example.com:5000/v2.0"
//! "fs.swift.simulation" = false
//! ```

mod key;
mod overrides;

pub use key::PropertyKey;
pub use overrides::{EnvOverrides, LayeredOverrides, OverrideSource, SystemProperties};

use parking_lot::RwLock;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, UfsError};

/// Raw property map: a present key may still hold null.
pub type Properties = HashMap<PropertyKey, Option<String>>;

/// Value accepted in a configuration file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FileValue {
    Str(String),
    Bool(bool),
}

impl FileValue {
    fn into_string(self) -> String {
        match self {
            FileValue::Str(s) => s,
            FileValue::Bool(b) => b.to_string(),
        }
    }
}

/// Process-wide configuration store.
///
/// Shared as `Arc<Configuration>` and injected wherever it is read. Reads and
/// single-key writes are atomic; callers touching several keys get no
/// cross-key atomicity.
#[derive(Debug, Default)]
pub struct Configuration {
    properties: RwLock<Properties>,
}

impl Configuration {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given properties.
    pub fn from_properties(properties: Properties) -> Self {
        Self {
            properties: RwLock::new(properties),
        }
    }

    /// Parse a flat TOML table of property names to strings or booleans.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: HashMap<PropertyKey, FileValue> = toml::from_str(content)?;
        let properties = raw
            .into_iter()
            .map(|(key, value)| (key, Some(value.into_string())))
            .collect();
        Ok(Self::from_properties(properties))
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            UfsError::Config(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Whether the key is present, even if its value is null.
    pub fn contains_key(&self, key: PropertyKey) -> bool {
        self.properties.read().contains_key(&key)
    }

    /// Value of the key; `None` when absent or null.
    pub fn get(&self, key: PropertyKey) -> Option<String> {
        self.properties.read().get(&key).cloned().flatten()
    }

    /// Whether the key is present and non-null.
    pub fn is_set(&self, key: PropertyKey) -> bool {
        matches!(self.properties.read().get(&key), Some(Some(_)))
    }

    /// Store a value.
    pub fn set(&self, key: PropertyKey, value: impl Into<String>) {
        self.properties.write().insert(key, Some(value.into()));
    }

    /// Store an explicit null for the key.
    pub fn set_null(&self, key: PropertyKey) {
        self.properties.write().insert(key, None);
    }

    /// Boolean value of the key. Absent or null reads as `false`.
    pub fn get_boolean(&self, key: PropertyKey) -> Result<bool> {
        match self.get(key) {
            None => Ok(false),
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(UfsError::InvalidValue { key, value }),
            },
        }
    }

    /// Store `value` only if the key is absent or null.
    ///
    /// The check and the write happen under one lock. Returns whether the
    /// value was written.
    pub fn set_if_unset(&self, key: PropertyKey, value: impl Into<String>) -> bool {
        let mut properties = self.properties.write();
        let slot = properties.entry(key).or_insert(None);
        if slot.is_some() {
            return false;
        }
        *slot = Some(value.into());
        true
    }

    /// Fill unset keys from an override source.
    ///
    /// Non-null values are never replaced. Returns the keys that were filled.
    pub fn merge_overrides(
        &self,
        overrides: &dyn OverrideSource,
        keys: &[PropertyKey],
    ) -> Vec<PropertyKey> {
        let mut filled = Vec::new();
        for &key in keys {
            if let Some(value) = overrides.get(key.name()) {
                if self.set_if_unset(key, value) {
                    filled.push(key);
                }
            }
        }
        if !filled.is_empty() {
            debug!(keys = ?filled, "Merged override properties");
        }
        filled
    }

    /// Copy of the current properties.
    pub fn snapshot(&self) -> Properties {
        self.properties.read().clone()
    }
}

/// Merge overrides into a copy of `persistent` without touching either.
///
/// For every key in `keys` with an override value, the value is used when
/// `persistent` lacks the key or holds null for it.
pub fn merged_properties(
    persistent: &Properties,
    overrides: &dyn OverrideSource,
    keys: &[PropertyKey],
) -> Properties {
    let mut merged = persistent.clone();
    for &key in keys {
        if let Some(value) = overrides.get(key.name()) {
            let slot = merged.entry(key).or_insert(None);
            if slot.is_none() {
                *slot = Some(value);
            }
        }
    }
    merged
}
