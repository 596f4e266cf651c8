//! Swift credential set and readiness.

use underfs::{Configuration, PropertyKey, Result};

/// Keys merged from overrides before readiness is evaluated.
pub const CREDENTIAL_KEYS: [PropertyKey; 7] = [
    PropertyKey::SwiftApiKey,
    PropertyKey::SwiftTenantKey,
    PropertyKey::SwiftUserKey,
    PropertyKey::SwiftAuthUrlKey,
    PropertyKey::SwiftAuthMethodKey,
    PropertyKey::SwiftPasswordKey,
    PropertyKey::SwiftSimulation,
];

/// Snapshot of the Swift credential properties.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SwiftCredentials {
    pub api_key: Option<String>,
    pub tenant: Option<String>,
    pub user: Option<String>,
    pub auth_url: Option<String>,
    pub auth_method: Option<String>,
    pub password: Option<String>,
    pub simulation: bool,
}

impl SwiftCredentials {
    /// Read the credential set from the store.
    ///
    /// Fails only when the simulation flag is not a boolean.
    pub fn from_conf(conf: &Configuration) -> Result<Self> {
        Ok(Self {
            api_key: conf.get(PropertyKey::SwiftApiKey),
            tenant: conf.get(PropertyKey::SwiftTenantKey),
            user: conf.get(PropertyKey::SwiftUserKey),
            auth_url: conf.get(PropertyKey::SwiftAuthUrlKey),
            auth_method: conf.get(PropertyKey::SwiftAuthMethodKey),
            password: conf.get(PropertyKey::SwiftPasswordKey),
            simulation: conf.get_boolean(PropertyKey::SwiftSimulation)?,
        })
    }

    /// Simulation mode, or a secret plus tenant, auth URL and user.
    pub fn is_ready(&self) -> bool {
        self.simulation
            || ((self.api_key.is_some() || self.password.is_some())
                && self.tenant.is_some()
                && self.auth_url.is_some()
                && self.user.is_some())
    }

    /// Keys whose absence keeps the set from being ready.
    ///
    /// A missing secret is reported as both the api key and the password.
    pub fn missing(&self) -> Vec<PropertyKey> {
        if self.simulation {
            return Vec::new();
        }
        let mut missing = Vec::new();
        if self.api_key.is_none() && self.password.is_none() {
            missing.push(PropertyKey::SwiftApiKey);
            missing.push(PropertyKey::SwiftPasswordKey);
        }
        if self.tenant.is_none() {
            missing.push(PropertyKey::SwiftTenantKey);
        }
        if self.auth_url.is_none() {
            missing.push(PropertyKey::SwiftAuthUrlKey);
        }
        if self.user.is_none() {
            missing.push(PropertyKey::SwiftUserKey);
        }
        missing
    }

    /// Secret used to authenticate: the api key, else the password.
    pub fn secret(&self) -> Option<&str> {
        self.api_key.as_deref().or(self.password.as_deref())
    }
}

impl std::fmt::Debug for SwiftCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |v: &Option<String>| v.as_ref().map(|_| "***");
        f.debug_struct("SwiftCredentials")
            .field("api_key", &mask(&self.api_key))
            .field("tenant", &self.tenant)
            .field("user", &self.user)
            .field("auth_url", &self.auth_url)
            .field("auth_method", &self.auth_method)
            .field("password", &mask(&self.password))
            .field("simulation", &self.simulation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> SwiftCredentials {
        SwiftCredentials {
            api_key: Some("k".to_string()),
            tenant: Some("t".to_string()),
            user: Some("n".to_string()),
            auth_url: Some("u".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_simulation_is_ready_alone() {
        let creds = SwiftCredentials {
            simulation: true,
            ..Default::default()
        };
        assert!(creds.is_ready());
        assert!(creds.missing().is_empty());
    }

    #[test]
    fn test_no_secret_not_ready() {
        let creds = SwiftCredentials {
            api_key: None,
            password: None,
            ..full()
        };
        assert!(!creds.is_ready());
        assert_eq!(
            creds.missing(),
            vec![PropertyKey::SwiftApiKey, PropertyKey::SwiftPasswordKey]
        );
    }

    #[test]
    fn test_api_key_ready() {
        assert!(full().is_ready());
        assert!(full().missing().is_empty());
    }

    #[test]
    fn test_password_substitutes_api_key() {
        let creds = SwiftCredentials {
            api_key: None,
            password: Some("p".to_string()),
            ..full()
        };
        assert!(creds.is_ready());
        assert_eq!(creds.secret(), Some("p"));
    }

    #[test]
    fn test_each_required_field_missing() {
        for strip in [
            PropertyKey::SwiftTenantKey,
            PropertyKey::SwiftAuthUrlKey,
            PropertyKey::SwiftUserKey,
        ] {
            let mut creds = full();
            creds.password = Some("p".to_string());
            match strip {
                PropertyKey::SwiftTenantKey => creds.tenant = None,
                PropertyKey::SwiftAuthUrlKey => creds.auth_url = None,
                _ => creds.user = None,
            }
            assert!(!creds.is_ready(), "ready without {}", strip);
            assert_eq!(creds.missing(), vec![strip]);
        }
    }

    #[test]
    fn test_secret_prefers_api_key() {
        let creds = SwiftCredentials {
            password: Some("p".to_string()),
            ..full()
        };
        assert_eq!(creds.secret(), Some("k"));
    }

    #[test]
    fn test_from_conf_null_is_absent() {
        let conf = Configuration::new();
        conf.set_null(PropertyKey::SwiftApiKey);
        conf.set(PropertyKey::SwiftPasswordKey, "p");
        conf.set(PropertyKey::SwiftTenantKey, "t");
        conf.set(PropertyKey::SwiftAuthUrlKey, "u");
        conf.set(PropertyKey::SwiftUserKey, "n");

        let creds = SwiftCredentials::from_conf(&conf).unwrap();
        assert_eq!(creds.api_key, None);
        assert!(!creds.simulation);
        assert!(creds.is_ready());
    }

    #[test]
    fn test_from_conf_bad_simulation_flag() {
        let conf = Configuration::new();
        conf.set(PropertyKey::SwiftSimulation, "sometimes");
        assert!(SwiftCredentials::from_conf(&conf).is_err());
    }

    #[test]
    fn test_debug_masks_secrets() {
        let creds = SwiftCredentials {
            password: Some("hunter2".to_string()),
            ..full()
        };
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("***"));
    }
}
