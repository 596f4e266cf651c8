pub mod check;
pub mod keys;

pub use check::run_check;
pub use keys::run_keys;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use underfs::{
    Configuration, EnvOverrides, LayeredOverrides, OverrideSource, SystemProperties,
    UnderFileSystemRegistry,
};
use underfs_swift::SwiftUnderFileSystemFactory;

/// Configuration store plus the overrides layered on top of it.
pub struct Session {
    pub conf: Arc<Configuration>,
    pub overrides: Arc<dyn OverrideSource>,
}

impl Session {
    /// Load the persistent layer from `conf_path` (if any) and stack `-D`
    /// definitions above environment overrides.
    pub fn open(conf_path: Option<&Path>, defines: &[String]) -> Result<Self> {
        let conf = match conf_path {
            Some(path) => Configuration::load(path)
                .with_context(|| format!("Failed to load configuration from {:?}", path))?,
            None => Configuration::new(),
        };

        let flags = SystemProperties::from_pairs(defines).context("Invalid -D definition")?;
        let overrides = LayeredOverrides::new()
            .with_layer(flags)
            .with_layer(EnvOverrides);

        Ok(Self {
            conf: Arc::new(conf),
            overrides: Arc::new(overrides),
        })
    }

    /// Registry with every built-in factory.
    pub fn registry(&self) -> UnderFileSystemRegistry {
        let registry = UnderFileSystemRegistry::new();
        registry.register(Arc::new(SwiftUnderFileSystemFactory::new(
            self.conf.clone(),
            self.overrides.clone(),
        )));
        registry
    }
}
