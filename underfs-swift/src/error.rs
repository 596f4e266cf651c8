//! Swift client construction errors.

use thiserror::Error;
use underfs::{PropertyKey, UfsError};

/// Errors raised while constructing a Swift client.
#[derive(Error, Debug)]
pub enum SwiftError {
    /// URI does not address a Swift container
    #[error("Not a Swift URI: {0}")]
    InvalidScheme(String),

    /// URI or configuration value could not be interpreted
    #[error(transparent)]
    Conf(#[from] UfsError),

    /// A required property is absent or null
    #[error("Missing Swift property: {0}")]
    MissingProperty(PropertyKey),

    /// Authentication method is not one of keystone, keystonev3, swiftauth, tempauth
    #[error("Unsupported Swift auth method: {0}")]
    UnsupportedAuthMethod(String),

    /// Authentication URL is malformed
    #[error("Invalid Swift auth URL '{url}': {source}")]
    InvalidAuthUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for Swift client construction.
pub type Result<T> = std::result::Result<T, SwiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_property_display() {
        let err = SwiftError::MissingProperty(PropertyKey::SwiftAuthUrlKey);
        assert_eq!(err.to_string(), "Missing Swift property: fs.swift.auth.url");
    }

    #[test]
    fn test_conf_error_is_transparent() {
        let err: SwiftError = UfsError::InvalidUri("missing scheme in 'x'".to_string()).into();
        assert_eq!(err.to_string(), "Invalid URI: missing scheme in 'x'");
    }
}
