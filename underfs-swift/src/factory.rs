//! Factory producing Swift under file systems.

use std::sync::Arc;
use tracing::{debug, error};
use underfs::{
    BoxError, Configuration, OverrideSource, Result, UfsError, UfsOptions, UfsUri,
    UnderFileSystem, UnderFileSystemFactory,
};

use crate::client::{SwiftUnderFileSystem, SWIFT_SCHEME};
use crate::credentials::{SwiftCredentials, CREDENTIAL_KEYS};

/// URI prefix owned by the Swift factory.
pub const SWIFT_SCHEME_HEADER: &str = "swift://";

/// Error message reported when the credential set is not ready.
pub const CREDENTIALS_UNAVAILABLE: &str =
    "Swift credentials not available, cannot create Swift under file system";

/// Constructs the client once credentials are known to be ready.
///
/// The default implementation builds a [`SwiftUnderFileSystem`]; tests and
/// embedders can substitute their own.
pub trait SwiftClientBuilder: Send + Sync {
    fn build(
        &self,
        uri: UfsUri,
        conf: &Configuration,
    ) -> std::result::Result<Box<dyn UnderFileSystem>, BoxError>;
}

/// Builds [`SwiftUnderFileSystem`] clients.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSwiftClientBuilder;

impl SwiftClientBuilder for DefaultSwiftClientBuilder {
    fn build(
        &self,
        uri: UfsUri,
        conf: &Configuration,
    ) -> std::result::Result<Box<dyn UnderFileSystem>, BoxError> {
        Ok(Box::new(SwiftUnderFileSystem::new(uri, conf)?))
    }
}

/// Factory for `swift://` URIs.
///
/// Each `create` call first seeds the shared [`Configuration`] with any
/// override values for credential keys it does not hold yet. Those writes
/// stay in place whether or not the call succeeds.
///
/// # Thread Safety
///
/// Stateless apart from the store merge, which is per-key atomic and
/// idempotent, so concurrent calls need no extra locking.
#[derive(Clone)]
pub struct SwiftUnderFileSystemFactory {
    conf: Arc<Configuration>,
    overrides: Arc<dyn OverrideSource>,
    builder: Arc<dyn SwiftClientBuilder>,
}

impl SwiftUnderFileSystemFactory {
    /// Create a factory reading `conf` and seeding it from `overrides`.
    pub fn new(conf: Arc<Configuration>, overrides: Arc<dyn OverrideSource>) -> Self {
        Self {
            conf,
            overrides,
            builder: Arc::new(DefaultSwiftClientBuilder),
        }
    }

    /// Replace the client builder.
    pub fn with_builder(mut self, builder: Arc<dyn SwiftClientBuilder>) -> Self {
        self.builder = builder;
        self
    }

    /// The configuration store this factory reads and seeds.
    pub fn conf(&self) -> &Arc<Configuration> {
        &self.conf
    }

    /// Merge overrides into the store and read back the credential set.
    pub fn resolve_credentials(&self) -> Result<SwiftCredentials> {
        self.conf.merge_overrides(&*self.overrides, &CREDENTIAL_KEYS);
        SwiftCredentials::from_conf(&self.conf).map_err(|e| {
            error!(error = %e, "Unreadable Swift simulation flag");
            UfsError::Configuration(e.to_string())
        })
    }

    fn construct(&self, path: &str) -> std::result::Result<Box<dyn UnderFileSystem>, BoxError> {
        let uri = UfsUri::parse(path)?;
        self.builder.build(uri, &self.conf)
    }
}

impl UnderFileSystemFactory for SwiftUnderFileSystemFactory {
    fn name(&self) -> &'static str {
        SWIFT_SCHEME
    }

    fn supports_path(&self, path: &str) -> bool {
        path.starts_with(SWIFT_SCHEME_HEADER)
    }

    fn create(
        &self,
        path: &str,
        options: Option<&UfsOptions>,
    ) -> Result<Box<dyn UnderFileSystem>> {
        if let Some(options) = options.filter(|o| !o.is_empty()) {
            debug!(count = options.len(), "Swift ignores mount options");
        }

        let creds = self.resolve_credentials()?;
        if !creds.is_ready() {
            error!(path, missing = ?creds.missing(), "{}", CREDENTIALS_UNAVAILABLE);
            return Err(UfsError::Configuration(CREDENTIALS_UNAVAILABLE.to_string()));
        }

        match self.construct(path) {
            Ok(ufs) => {
                debug!(path, simulation = creds.simulation, "Created Swift under file system");
                Ok(ufs)
            }
            Err(source) => {
                error!(path, error = %source, "Failed to create Swift under file system");
                Err(UfsError::construction(SWIFT_SCHEME, source))
            }
        }
    }
}

impl std::fmt::Debug for SwiftUnderFileSystemFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwiftUnderFileSystemFactory").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use underfs::{PropertyKey, SystemProperties};

    fn factory(conf: Configuration, overrides: SystemProperties) -> SwiftUnderFileSystemFactory {
        SwiftUnderFileSystemFactory::new(Arc::new(conf), Arc::new(overrides))
    }

    #[test]
    fn test_supports_path() {
        let f = factory(Configuration::new(), SystemProperties::new());
        assert!(f.supports_path("swift://container/path"));
        assert!(f.supports_path("swift://"));
        assert!(!f.supports_path(""));
        assert!(!f.supports_path("swift:/container"));
        assert!(!f.supports_path("s3://bucket/key"));
        assert!(!f.supports_path("SWIFT://container"));
        assert_eq!(f.name(), "swift");
    }

    #[test]
    fn test_simulation_creates_real_client() {
        let mut overrides = SystemProperties::new();
        overrides.insert("fs.swift.simulation", "true");
        let f = factory(Configuration::new(), overrides);

        let ufs = f.create("swift://container/dir", None).unwrap();
        assert_eq!(ufs.ufs_type(), "swift");
        assert_eq!(ufs.root().authority(), "container");
        assert_eq!(ufs.root().path(), "/dir");
    }

    #[test]
    fn test_unready_reports_configuration_error() {
        let f = factory(Configuration::new(), SystemProperties::new());
        let err = f.create("swift://container", None).unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(err.to_string(), CREDENTIALS_UNAVAILABLE);
    }

    #[test]
    fn test_bad_simulation_flag_is_configuration_error() {
        let conf = Configuration::new();
        conf.set(PropertyKey::SwiftSimulation, "perhaps");
        let f = factory(conf, SystemProperties::new());

        let err = f.create("swift://container", None).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_unparsable_uri_is_construction_error() {
        let conf = Configuration::new();
        conf.set(PropertyKey::SwiftSimulation, "true");
        let f = factory(conf, SystemProperties::new());

        let err = f.create("swift://", None).unwrap_err();
        assert!(err.is_construction());
    }

    #[test]
    fn test_client_error_is_construction_error() {
        let conf = Configuration::new();
        conf.set(PropertyKey::SwiftUserKey, "alice");
        conf.set(PropertyKey::SwiftTenantKey, "analytics");
        conf.set(PropertyKey::SwiftAuthUrlKey, "::not-a-url::");
        conf.set(PropertyKey::SwiftApiKey, "key");
        let f = factory(conf, SystemProperties::new());

        let err = f.create("swift://container", None).unwrap_err();
        assert!(err.is_construction());
        assert!(err.to_string().contains("Invalid Swift auth URL"));
    }
}
