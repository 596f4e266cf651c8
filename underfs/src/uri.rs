//! Resource identifiers for under file systems.
//!
//! URIs follow the pattern: `scheme://authority/path`
//!
//! # Examples
//!
//! ```
//! use underfs::UfsUri;
//!
//! let uri = UfsUri::parse("swift://container/warehouse//logs/").unwrap();
//!
//! assert_eq!(uri.scheme(), "swift");
//! assert_eq!(uri.authority(), "container");
//! assert_eq!(uri.path(), "/warehouse/logs");
//! assert_eq!(uri.to_string(), "swift://container/warehouse/logs");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, UfsError};

/// Separator between scheme and authority.
pub const SCHEME_SEPARATOR: &str = "://";

/// Parsed `scheme://authority/path` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UfsUri {
    scheme: String,
    authority: String,
    path: String,
}

impl UfsUri {
    /// Parse from string representation.
    ///
    /// The path always starts with `/`, repeated slashes collapse and a
    /// trailing slash is dropped.
    pub fn parse(s: &str) -> Result<Self> {
        let (scheme, rest) = s
            .split_once(SCHEME_SEPARATOR)
            .ok_or_else(|| UfsError::InvalidUri(format!("missing scheme in '{}'", s)))?;

        if scheme.is_empty() {
            return Err(UfsError::InvalidUri(format!("empty scheme in '{}'", s)));
        }

        let (authority, raw_path) = match rest.find('/') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };

        if authority.is_empty() {
            return Err(UfsError::InvalidUri(format!("empty authority in '{}'", s)));
        }

        Ok(Self {
            scheme: scheme.to_string(),
            authority: authority.to_string(),
            path: normalize_path(raw_path),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Authority component; the bucket or container for object stores.
    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Check if this URI points at the root of its authority.
    pub fn is_root(&self) -> bool {
        self.path == "/"
    }
}

fn normalize_path(raw: &str) -> String {
    let segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

impl fmt::Display for UfsUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.scheme, SCHEME_SEPARATOR, self.authority, self.path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let uri = UfsUri::parse("swift://container/a/b/c.parquet").unwrap();
        assert_eq!(uri.scheme(), "swift");
        assert_eq!(uri.authority(), "container");
        assert_eq!(uri.path(), "/a/b/c.parquet");
        assert!(!uri.is_root());
    }

    #[test]
    fn test_parse_root() {
        let uri = UfsUri::parse("swift://container").unwrap();
        assert_eq!(uri.path(), "/");
        assert!(uri.is_root());

        let uri = UfsUri::parse("swift://container/").unwrap();
        assert!(uri.is_root());
        assert_eq!(uri.to_string(), "swift://container/");
    }

    #[test]
    fn test_parse_normalizes_slashes() {
        let uri = UfsUri::parse("swift://c//x///y/").unwrap();
        assert_eq!(uri.path(), "/x/y");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            UfsUri::parse("container/path"),
            Err(UfsError::InvalidUri(_))
        ));
        assert!(matches!(
            UfsUri::parse("://container/path"),
            Err(UfsError::InvalidUri(_))
        ));
        assert!(matches!(
            UfsUri::parse("swift:///path"),
            Err(UfsError::InvalidUri(_))
        ));
        assert!(UfsUri::parse("").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let uri = UfsUri::parse("swift://data-lake/tables/events").unwrap();
        assert_eq!(UfsUri::parse(&uri.to_string()).unwrap(), uri);
    }
}
