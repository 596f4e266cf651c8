//! Under file system error types.

use std::io;
use thiserror::Error;

use crate::conf::PropertyKey;

/// Boxed cause carried by construction failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while resolving or constructing an under file system.
#[derive(Error, Debug)]
pub enum UfsError {
    /// Credentials or required settings are unavailable
    #[error("{0}")]
    Configuration(String),

    /// The backend client library failed to initialize
    #[error("Failed to create {ufs} under file system: {source}")]
    Construction {
        /// Backend type, e.g. "swift"
        ufs: String,
        #[source]
        source: BoxError,
    },

    /// Malformed resource identifier
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// A property holds a value that cannot be interpreted
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: PropertyKey, value: String },

    /// Configuration file or override error
    #[error("Config error: {0}")]
    Config(String),

    /// No registered factory supports the path
    #[error("No under file system factory supports path: {0}")]
    NoFactory(String),

    /// I/O error while loading configuration
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for under file system operations.
pub type Result<T> = std::result::Result<T, UfsError>;

impl UfsError {
    /// Wrap a client library failure, keeping the cause chain.
    pub fn construction(ufs: impl Into<String>, source: impl Into<BoxError>) -> Self {
        UfsError::Construction {
            ufs: ufs.into(),
            source: source.into(),
        }
    }

    /// Check if this is a missing-credentials error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, UfsError::Configuration(_))
    }

    /// Check if this is a client construction error.
    pub fn is_construction(&self) -> bool {
        matches!(self, UfsError::Construction { .. })
    }
}
