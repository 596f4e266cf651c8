//! Registry of under file system factories.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use crate::error::{Result, UfsError};
use crate::traits::{UfsOptions, UnderFileSystem, UnderFileSystemFactory};

/// Ordered set of factories. The first factory that supports a path wins.
#[derive(Default)]
pub struct UnderFileSystemRegistry {
    factories: RwLock<Vec<Arc<dyn UnderFileSystemFactory>>>,
}

impl UnderFileSystemRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory after those already present.
    pub fn register(&self, factory: Arc<dyn UnderFileSystemFactory>) {
        debug!(factory = factory.name(), "Registered under file system factory");
        self.factories.write().push(factory);
    }

    /// First factory supporting `path`.
    pub fn find(&self, path: &str) -> Option<Arc<dyn UnderFileSystemFactory>> {
        self.factories
            .read()
            .iter()
            .find(|factory| factory.supports_path(path))
            .cloned()
    }

    /// Create a client using the first factory supporting `path`.
    pub fn create(
        &self,
        path: &str,
        options: Option<&UfsOptions>,
    ) -> Result<Box<dyn UnderFileSystem>> {
        let factory = self
            .find(path)
            .ok_or_else(|| UfsError::NoFactory(path.to_string()))?;
        debug!(factory = factory.name(), path, "Creating under file system");
        factory.create(path, options)
    }

    /// Names of registered factories, in lookup order.
    pub fn names(&self) -> Vec<&'static str> {
        self.factories.read().iter().map(|f| f.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.factories.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.read().is_empty()
    }
}

impl std::fmt::Debug for UnderFileSystemRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnderFileSystemRegistry")
            .field("factories", &self.names())
            .finish()
    }
}
