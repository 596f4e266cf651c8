//! Pluggable under file system abstraction.
//!
//! This crate defines the seams that storage backends plug into: the
//! [`UnderFileSystemFactory`] trait each backend implements, the
//! [`UnderFileSystemRegistry`] that picks a factory for a URI, and the
//! layered [`Configuration`] store factories read credentials from.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  Caller                                          │
//! │            ┌──────────────────────────┐          │
//! │            │  UnderFileSystemRegistry │          │
//! │            └────────────┬─────────────┘          │
//! │                         │ supports_path / create │
//! │        ┌────────────────┼────────────────┐       │
//! │        ▼                ▼                ▼       │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐  │
//! │  │  Swift   │     │   ...    │     │   ...    │  │
//! │  └────┬─────┘     └──────────┘     └──────────┘  │
//! │       │ reads / merges                            │
//! │       ▼                                          │
//! │  ┌───────────────┐   ┌────────────────────────┐  │
//! │  │ Configuration │ ◄─│ OverrideSource (-D/env)│  │
//! │  └───────────────┘   └────────────────────────┘  │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use underfs::{Configuration, PropertyKey, SystemProperties};
//!
//! let conf = Arc::new(Configuration::new());
//! conf.set(PropertyKey::SwiftUserKey, "admin");
//!
//! let mut overrides = SystemProperties::new();
//! overrides.insert("fs.swift.user", "ignored");
//! overrides.insert("fs.swift.tenant", "analytics");
//!
//! conf.merge_overrides(&overrides, &[PropertyKey::SwiftUserKey, PropertyKey::SwiftTenantKey]);
//!
//! assert_eq!(conf.get(PropertyKey::SwiftUserKey).as_deref(), Some("admin"));
//! assert_eq!(conf.get(PropertyKey::SwiftTenantKey).as_deref(), Some("analytics"));
//! ```

pub mod conf;
mod error;
mod registry;
mod traits;
mod uri;

pub use conf::{
    merged_properties, Configuration, EnvOverrides, LayeredOverrides, OverrideSource,
    Properties, PropertyKey, SystemProperties,
};
pub use error::{BoxError, Result, UfsError};
pub use registry::UnderFileSystemRegistry;
pub use traits::{UfsOptions, UnderFileSystem, UnderFileSystemFactory};
pub use uri::{UfsUri, SCHEME_SEPARATOR};
