//! Process-level override sources.
//!
//! Overrides are settings supplied outside the persistent configuration,
//! such as `-D name=value` launch flags or environment variables. They only
//! seed the store for keys it does not already hold.

use std::collections::HashMap;

use crate::error::{Result, UfsError};

/// Read-only lookup of override values by dotted property name.
pub trait OverrideSource: Send + Sync {
    /// Value for `name`, if this source supplies one.
    fn get(&self, name: &str) -> Option<String>;
}

impl OverrideSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

/// Explicit `name=value` overrides, typically from launch flags.
#[derive(Debug, Clone, Default)]
pub struct SystemProperties {
    values: HashMap<String, String>,
}

impl SystemProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a single `name=value` pair.
    ///
    /// The value may itself contain `=`; only the first one separates.
    pub fn parse_pair(pair: &str) -> Result<(String, String)> {
        let (name, value) = pair.split_once('=').ok_or_else(|| {
            UfsError::Config(format!("Expected name=value, got '{}'", pair))
        })?;
        let name = name.trim();
        if name.is_empty() {
            return Err(UfsError::Config(format!("Empty property name in '{}'", pair)));
        }
        Ok((name.to_string(), value.to_string()))
    }

    /// Build from a list of `name=value` pairs. Later pairs win.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut props = Self::new();
        for pair in pairs {
            let (name, value) = Self::parse_pair(pair.as_ref())?;
            props.values.insert(name, value);
        }
        Ok(props)
    }

    /// Set an override.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl OverrideSource for SystemProperties {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Overrides read from the process environment.
///
/// `fs.swift.apikey` is looked up as `FS_SWIFT_APIKEY`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvOverrides;

impl EnvOverrides {
    /// Environment variable name for a dotted property name.
    pub fn var_name(name: &str) -> String {
        name.chars()
            .map(|c| if c == '.' || c == '-' { '_' } else { c.to_ascii_uppercase() })
            .collect()
    }
}

impl OverrideSource for EnvOverrides {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(Self::var_name(name)).ok()
    }
}

/// Ordered stack of sources; the first one supplying a value wins.
#[derive(Default)]
pub struct LayeredOverrides {
    layers: Vec<Box<dyn OverrideSource>>,
}

impl LayeredOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer below the existing ones.
    pub fn with_layer(mut self, source: impl OverrideSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }
}

impl OverrideSource for LayeredOverrides {
    fn get(&self, name: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| layer.get(name))
    }
}

impl std::fmt::Debug for LayeredOverrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredOverrides")
            .field("layers", &self.layers.len())
            .finish()
    }
}
