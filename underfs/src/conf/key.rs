//! Property keys understood by the configuration store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named configuration property.
///
/// The set is fixed: configuration files and override sources can only
/// address keys listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PropertyKey {
    /// Swift API key
    #[serde(rename = "fs.swift.apikey")]
    SwiftApiKey,
    /// Swift tenant (project) name
    #[serde(rename = "fs.swift.tenant")]
    SwiftTenantKey,
    /// Swift user name
    #[serde(rename = "fs.swift.user")]
    SwiftUserKey,
    /// Swift authentication endpoint
    #[serde(rename = "fs.swift.auth.url")]
    SwiftAuthUrlKey,
    /// Swift authentication method (keystone, keystonev3, swiftauth, tempauth)
    #[serde(rename = "fs.swift.auth.method")]
    SwiftAuthMethodKey,
    /// Swift password
    #[serde(rename = "fs.swift.password")]
    SwiftPasswordKey,
    /// Run against an in-memory Swift account instead of a real cluster
    #[serde(rename = "fs.swift.simulation")]
    SwiftSimulation,
    /// Preferred Swift region
    #[serde(rename = "fs.swift.region")]
    SwiftRegion,
}

impl PropertyKey {
    /// Every known key.
    pub const ALL: [PropertyKey; 8] = [
        PropertyKey::SwiftApiKey,
        PropertyKey::SwiftTenantKey,
        PropertyKey::SwiftUserKey,
        PropertyKey::SwiftAuthUrlKey,
        PropertyKey::SwiftAuthMethodKey,
        PropertyKey::SwiftPasswordKey,
        PropertyKey::SwiftSimulation,
        PropertyKey::SwiftRegion,
    ];

    /// Dotted property name, as used in config files and overrides.
    pub fn name(&self) -> &'static str {
        match self {
            PropertyKey::SwiftApiKey => "fs.swift.apikey",
            PropertyKey::SwiftTenantKey => "fs.swift.tenant",
            PropertyKey::SwiftUserKey => "fs.swift.user",
            PropertyKey::SwiftAuthUrlKey => "fs.swift.auth.url",
            PropertyKey::SwiftAuthMethodKey => "fs.swift.auth.method",
            PropertyKey::SwiftPasswordKey => "fs.swift.password",
            PropertyKey::SwiftSimulation => "fs.swift.simulation",
            PropertyKey::SwiftRegion => "fs.swift.region",
        }
    }

    /// Parse a dotted property name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// Whether values of this key must not be echoed back to operators.
    pub fn is_secret(&self) -> bool {
        matches!(self, PropertyKey::SwiftApiKey | PropertyKey::SwiftPasswordKey)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for key in PropertyKey::ALL {
            assert_eq!(PropertyKey::from_name(key.name()), Some(key));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(PropertyKey::from_name("fs.s3.accessKey"), None);
        assert_eq!(PropertyKey::from_name(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(PropertyKey::SwiftAuthUrlKey.to_string(), "fs.swift.auth.url");
    }

    #[test]
    fn test_serde_name_matches() {
        let json = serde_json::to_string(&PropertyKey::SwiftAuthMethodKey).unwrap();
        assert_eq!(json, "\"fs.swift.auth.method\"");
    }

    #[test]
    fn test_secrets() {
        assert!(PropertyKey::SwiftPasswordKey.is_secret());
        assert!(PropertyKey::SwiftApiKey.is_secret());
        assert!(!PropertyKey::SwiftUserKey.is_secret());
    }
}
