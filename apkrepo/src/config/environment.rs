//! Environment variable handling for configuration overrides.
//!
//! Every string option can be supplied as `APKREPO_<OPTION>` (for example
//! `APKREPO_KEYSTOREPASS`), which keeps passwords out of the settings file.
//! `keyaliases` cannot be overridden this way.

use crate::config::document::SettingsDocument;
use crate::config::schema::OptionName;
use serde_yaml::Value;
use std::env;

/// Prefix shared by all option override variables.
pub const ENV_PREFIX: &str = "APKREPO_";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```
/// use apkrepo::config::{EnvironmentConfig, SettingsDocument};
/// use apkrepo::OptionName;
///
/// assert_eq!(EnvironmentConfig::var_name(OptionName::Keypass), "APKREPO_KEYPASS");
///
/// let mut doc = SettingsDocument::parse("keypass: from-file\n").unwrap();
/// let applied = EnvironmentConfig::apply_with(&mut doc, |var| {
///     (var == "APKREPO_KEYPASS").then(|| "from-env".to_string())
/// });
/// assert_eq!(applied, vec![OptionName::Keypass]);
/// assert_eq!(doc.get(OptionName::Keypass).and_then(|v| v.as_str()), Some("from-env"));
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Name of the override variable for `option`.
    #[must_use]
    pub fn var_name(option: OptionName) -> String {
        format!("{ENV_PREFIX}{}", option.as_str().to_uppercase())
    }

    /// Apply `APKREPO_*` overrides from the process environment.
    ///
    /// Returns the options that were overridden. Variables that are not
    /// valid Unicode are ignored.
    pub fn apply_overrides(doc: &mut SettingsDocument) -> Vec<OptionName> {
        Self::apply_with(doc, |var| env::var(var).ok())
    }

    /// Apply overrides using `lookup` in place of the process environment.
    pub fn apply_with<F>(doc: &mut SettingsDocument, lookup: F) -> Vec<OptionName>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut applied = Vec::new();
        for option in OptionName::ALL.into_iter().filter(|o| o.is_scalar()) {
            if let Some(value) = lookup(&Self::var_name(option)) {
                log::debug!("{option} overridden from environment");
                doc.set(option, Value::String(value));
                applied.push(option);
            }
        }
        applied
    }
}
