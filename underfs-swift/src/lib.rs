//! OpenStack Swift backend for the `underfs` abstraction.
//!
//! [`SwiftUnderFileSystemFactory`] claims `swift://` URIs. On `create` it
//! seeds the shared configuration with override values for any Swift
//! credential it is missing, checks that the credential set is usable and
//! then builds a client bound to the URI.
//!
//! # Credentials
//!
//! The factory is ready when simulation mode is on, or when an api key or a
//! password is set together with a tenant, an auth URL and a user:
//!
//! | property                | meaning                                         |
//! |-------------------------|-------------------------------------------------|
//! | `fs.swift.apikey`       | API key (preferred secret)                      |
//! | `fs.swift.password`     | password (used when no api key is set)          |
//! | `fs.swift.tenant`       | tenant / project                                |
//! | `fs.swift.user`         | user name                                       |
//! | `fs.swift.auth.url`     | auth endpoint                                   |
//! | `fs.swift.auth.method`  | keystone (default), keystonev3, swiftauth, tempauth |
//! | `fs.swift.simulation`   | use an in-memory account                        |
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use underfs::{Configuration, SystemProperties, UnderFileSystemFactory};
//! use underfs_swift::SwiftUnderFileSystemFactory;
//!
//! let mut overrides = SystemProperties::new();
//! overrides.insert("fs.swift.simulation", "true");
//!
//! let factory = SwiftUnderFileSystemFactory::new(
//!     Arc::new(Configuration::new()),
//!     Arc::new(overrides),
//! );
//!
//! assert!(factory.supports_path("swift://container/tables"));
//! let ufs = factory.create("swift://container/tables", None).unwrap();
//! assert_eq!(ufs.ufs_type(), "swift");
//! ```

mod client;
mod credentials;
mod error;
mod factory;

pub use client::{SwiftAccount, SwiftAuthMethod, SwiftUnderFileSystem, SWIFT_SCHEME};
pub use credentials::{SwiftCredentials, CREDENTIAL_KEYS};
pub use error::{Result, SwiftError};
pub use factory::{
    DefaultSwiftClientBuilder, SwiftClientBuilder, SwiftUnderFileSystemFactory,
    CREDENTIALS_UNAVAILABLE, SWIFT_SCHEME_HEADER,
};
