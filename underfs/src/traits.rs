//! Core under file system trait definitions.
//!
//! A backend crate ships an [`UnderFileSystemFactory`]; the registry asks
//! each factory whether it supports a path and asks the first match to
//! create a client bound to that path.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::error::Result;
use crate::uri::UfsUri;

/// Per-mount options handed through to factories. Backends may ignore them.
pub type UfsOptions = HashMap<String, String>;

/// Client bound to one under file system location.
///
/// The caller that requested the client owns it exclusively.
pub trait UnderFileSystem: Send + Sync + Debug {
    /// Short backend name, e.g. "swift".
    fn ufs_type(&self) -> &'static str;

    /// Location this client was created for.
    fn root(&self) -> &UfsUri;
}

/// Pluggable factory for one kind of under file system.
///
/// # Thread Safety
///
/// Implementations must allow `supports_path` and `create` to be called
/// concurrently from multiple threads.
pub trait UnderFileSystemFactory: Send + Sync {
    /// Short backend name, used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Whether this factory owns `path`. Never fails.
    fn supports_path(&self, path: &str) -> bool;

    /// Create a client bound to `path`.
    ///
    /// Either returns a usable client or an error; never a partially
    /// initialized client.
    fn create(
        &self,
        path: &str,
        options: Option<&UfsOptions>,
    ) -> Result<Box<dyn UnderFileSystem>>;
}
