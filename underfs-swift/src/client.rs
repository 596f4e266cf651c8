//! OpenStack Swift under file system client.
//!
//! A client is bound to one container (the URI authority) and an optional
//! object prefix (the URI path). Construction validates the account settings
//! and prepares the HTTP client; authentication is deferred to first use.
//!
//! In simulation mode the account is backed by an in-memory object store and
//! no network client is created.

use object_store::memory::InMemory;
use object_store::ObjectStore;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, instrument};
use underfs::{Configuration, PropertyKey, UfsUri, UnderFileSystem};
use url::Url;

use crate::credentials::SwiftCredentials;
use crate::error::{Result, SwiftError};

/// Swift URI scheme.
pub const SWIFT_SCHEME: &str = "swift";

/// Authentication protocol spoken to the auth endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwiftAuthMethod {
    /// Keystone v2 tokens
    #[default]
    Keystone,
    /// Keystone v3 tokens
    KeystoneV3,
    /// Swift's built-in v1 auth; logs in as `tenant:user`
    SwiftAuth,
    /// TempAuth middleware
    TempAuth,
}

impl FromStr for SwiftAuthMethod {
    type Err = SwiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keystone" => Ok(SwiftAuthMethod::Keystone),
            "keystonev3" | "keystone_v3" => Ok(SwiftAuthMethod::KeystoneV3),
            "swiftauth" => Ok(SwiftAuthMethod::SwiftAuth),
            "tempauth" => Ok(SwiftAuthMethod::TempAuth),
            _ => Err(SwiftError::UnsupportedAuthMethod(s.to_string())),
        }
    }
}

impl fmt::Display for SwiftAuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwiftAuthMethod::Keystone => write!(f, "keystone"),
            SwiftAuthMethod::KeystoneV3 => write!(f, "keystonev3"),
            SwiftAuthMethod::SwiftAuth => write!(f, "swiftauth"),
            SwiftAuthMethod::TempAuth => write!(f, "tempauth"),
        }
    }
}

/// Resolved account settings for a real Swift cluster.
#[derive(Clone)]
pub struct SwiftAccount {
    pub auth_url: Url,
    pub auth_method: SwiftAuthMethod,
    /// Login name sent to the auth endpoint
    pub username: String,
    /// Tenant scope; `None` when folded into the login name
    pub tenant: Option<String>,
    pub region: Option<String>,
    secret: String,
}

impl SwiftAccount {
    /// Build account settings from the credential set.
    pub fn from_credentials(creds: &SwiftCredentials, region: Option<String>) -> Result<Self> {
        let user = creds
            .user
            .clone()
            .ok_or(SwiftError::MissingProperty(PropertyKey::SwiftUserKey))?;
        let tenant = creds
            .tenant
            .clone()
            .ok_or(SwiftError::MissingProperty(PropertyKey::SwiftTenantKey))?;
        let secret = creds
            .secret()
            .map(str::to_string)
            .ok_or(SwiftError::MissingProperty(PropertyKey::SwiftApiKey))?;
        let raw_url = creds
            .auth_url
            .as_deref()
            .ok_or(SwiftError::MissingProperty(PropertyKey::SwiftAuthUrlKey))?;
        let auth_url = Url::parse(raw_url).map_err(|source| SwiftError::InvalidAuthUrl {
            url: raw_url.to_string(),
            source,
        })?;

        let auth_method = match creds.auth_method.as_deref() {
            Some(method) => method.parse()?,
            None => SwiftAuthMethod::default(),
        };

        let (username, tenant) = match auth_method {
            SwiftAuthMethod::SwiftAuth => (format!("{}:{}", tenant, user), None),
            _ => (user, Some(tenant)),
        };

        Ok(Self {
            auth_url,
            auth_method,
            username,
            tenant,
            region,
            secret,
        })
    }

    /// Secret sent to the auth endpoint.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for SwiftAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwiftAccount")
            .field("auth_url", &self.auth_url.as_str())
            .field("auth_method", &self.auth_method)
            .field("username", &self.username)
            .field("tenant", &self.tenant)
            .field("region", &self.region)
            .field("secret", &"***")
            .finish()
    }
}

enum Access {
    Simulated(Arc<dyn ObjectStore>),
    Remote {
        http: reqwest::Client,
        account: SwiftAccount,
    },
}

/// Swift under file system bound to one container and prefix.
pub struct SwiftUnderFileSystem {
    root: UfsUri,
    container: String,
    prefix: String,
    access: Access,
}

impl SwiftUnderFileSystem {
    /// Create a client for `uri` using the settings in `conf`.
    #[instrument(skip_all, fields(uri = %uri))]
    pub fn new(uri: UfsUri, conf: &Configuration) -> Result<Self> {
        if uri.scheme() != SWIFT_SCHEME {
            return Err(SwiftError::InvalidScheme(uri.to_string()));
        }

        let creds = SwiftCredentials::from_conf(conf)?;
        let container = uri.authority().to_string();
        let prefix = container_prefix(uri.path());

        let access = if creds.simulation {
            debug!(container = %container, "Using simulated Swift account");
            Access::Simulated(Arc::new(InMemory::new()))
        } else {
            let region = conf.get(PropertyKey::SwiftRegion);
            let account = SwiftAccount::from_credentials(&creds, region)?;
            let http = reqwest::Client::builder()
                .user_agent(concat!("underfs-swift/", env!("CARGO_PKG_VERSION")))
                .build()?;
            debug!(
                container = %container,
                auth_method = %account.auth_method,
                auth_url = %account.auth_url,
                "Prepared Swift account"
            );
            Access::Remote { http, account }
        };

        Ok(Self {
            root: uri,
            container,
            prefix,
            access,
        })
    }

    /// Container holding this file system's objects.
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Object name prefix; empty or ending in `/`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self.access, Access::Simulated(_))
    }

    /// Account settings, unless simulated.
    pub fn account(&self) -> Option<&SwiftAccount> {
        match &self.access {
            Access::Remote { account, .. } => Some(account),
            Access::Simulated(_) => None,
        }
    }

    /// HTTP client used to talk to the cluster, unless simulated.
    pub fn http_client(&self) -> Option<&reqwest::Client> {
        match &self.access {
            Access::Remote { http, .. } => Some(http),
            Access::Simulated(_) => None,
        }
    }

    /// In-memory store standing in for the account in simulation mode.
    pub fn simulated_store(&self) -> Option<Arc<dyn ObjectStore>> {
        match &self.access {
            Access::Simulated(store) => Some(store.clone()),
            Access::Remote { .. } => None,
        }
    }
}

/// Object prefix for a URI path: no leading slash, trailing slash unless empty.
fn container_prefix(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}/", trimmed)
    }
}

impl UnderFileSystem for SwiftUnderFileSystem {
    fn ufs_type(&self) -> &'static str {
        SWIFT_SCHEME
    }

    fn root(&self) -> &UfsUri {
        &self.root
    }
}

impl fmt::Debug for SwiftUnderFileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwiftUnderFileSystem")
            .field("container", &self.container)
            .field("prefix", &self.prefix)
            .field("account", &self.account())
            .field("simulated", &self.is_simulated())
            .finish()
    }
}
