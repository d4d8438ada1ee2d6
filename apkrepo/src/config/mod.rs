//! Configuration system for apkrepo.
//!
//! The operator's settings document is a YAML mapping of option names to
//! values. It is loaded once, validated eagerly, and exposed as an immutable
//! [`BuildConfiguration`] shared by every consumer.
//!
//! # Loading pipeline
//!
//! 1. [`SettingsDocument::parse`]: YAML to option map; unknown keys fail
//! 2. [`EnvironmentConfig`]: optional `APKREPO_*` overrides (CLI only)
//! 3. [`ConfigValidator::validate`]: required options, types, signing pair
//!
//! # Examples
//!
//! ```
//! use apkrepo::config::{template::SAMPLE_CONFIG, ConfigLoader};
//!
//! let config = ConfigLoader::load_str(SAMPLE_CONFIG).unwrap();
//! assert_eq!(config.resolve_key_alias("com.example.app"), Some("example"));
//! assert_eq!(config.resolve_key_alias("org.unknown"), None);
//! ```
//!
//! Unknown options are rejected rather than silently ignored:
//!
//! ```
//! use apkrepo::{ConfigLoader, Error};
//!
//! let err = ConfigLoader::load_str("foo_bar: 1\n").unwrap_err();
//! assert!(matches!(err, Error::UnknownOption { name } if name == "foo_bar"));
//! ```

pub mod document;
pub mod environment;
pub mod loader;
pub mod schema;
pub mod template;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use document::SettingsDocument;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use schema::{
    BuildConfiguration, OptionName, OptionValue, PathStatus, RepoSigning, DEFAULT_JAVACC_PATH,
    PUBKEY_NOT_SET,
};
pub use validator::ConfigValidator;
