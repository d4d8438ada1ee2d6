#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # apkrepo
//!
//! Configuration schema and loader for an Android application repository
//! build tool.
//!
//! The operator copies the sample settings document, edits it, and the tool
//! loads it once at startup into an immutable [`BuildConfiguration`]. Every
//! other part of the build (packaging, signing, index generation) reads
//! options from that record.
//!
//! ## Core Types
//!
//! - [`BuildConfiguration`]: The validated, read-only configuration
//! - [`OptionName`] and [`OptionValue`]: Schema keys and typed lookups
//! - [`ConfigLoader`]: Reading and discovering settings documents
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use apkrepo::{ConfigLoader, OptionValue};
//!
//! let config = ConfigLoader::load_str(
//!     r#"
//! aapt_path: /opt/sdk/tools/aapt
//! sdk_path: /opt/sdk
//! ndk_path: /opt/ndk
//! repo_url: https://example.org/repo
//! repo_name: Example
//! keystore: /srv/keys/release.keystore
//! keystorepass: foo
//! keypass: foo2
//! keydname: "CN=Example, O=Example, C=US"
//! keyaliases:
//!   com.example.app: example
//! "#,
//! )
//! .unwrap();
//!
//! assert!(!config.is_signed());
//! assert_eq!(config.resolve_key_alias("com.example.app"), Some("example"));
//! assert_eq!(
//!     config.get("javacc_path").unwrap(),
//!     OptionValue::Str("/usr/share/java")
//! );
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod secret;

// Re-export key types at crate root for convenience
pub use config::{
    BuildConfiguration, ConfigLoader, ConfigValidator, EnvironmentConfig, OptionName, OptionValue,
    PathStatus, RepoSigning,
};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use secret::SecretString;
