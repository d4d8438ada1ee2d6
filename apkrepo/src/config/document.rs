//! The raw settings document, before validation.
//!
//! A settings document is a YAML mapping from option name to value. This
//! module only checks that every key is a known option; typing and
//! cross-field rules live in [`ConfigValidator`](super::ConfigValidator).

use crate::config::schema::OptionName;
use crate::error::{Error, Result};
use crate::secret::REDACTED;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Option values as read from a settings document, keyed by schema name.
///
/// # Examples
///
/// ```
/// use apkrepo::config::SettingsDocument;
/// use apkrepo::OptionName;
///
/// let doc = SettingsDocument::parse("repo_name: FDroid\nrepo_keyalias: ~\n").unwrap();
/// assert!(doc.get(OptionName::RepoName).is_some());
/// // A null value counts as absent.
/// assert!(doc.get(OptionName::RepoKeyalias).is_none());
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct SettingsDocument {
    entries: BTreeMap<OptionName, Value>,
}

impl fmt::Debug for SettingsDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in &self.entries {
            if name.is_secret() && !value.is_null() {
                map.entry(&name.as_str(), &REDACTED);
            } else {
                map.entry(&name.as_str(), value);
            }
        }
        map.finish()
    }
}

impl SettingsDocument {
    /// Parse a YAML settings document.
    ///
    /// An empty document is an empty mapping.
    ///
    /// # Errors
    ///
    /// - [`Error::Parse`] if the text is not YAML or the top level is not a mapping
    /// - [`Error::UnknownOption`] for any key that is not part of the schema
    /// - [`Error::MalformedOption`] for a non-string key
    pub fn parse(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_yaml::from_str(source)?;
        Self::from_value(value)
    }

    /// Build a document from an already-parsed YAML value.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse), minus YAML syntax errors.
    pub fn from_value(value: Value) -> Result<Self> {
        let mapping = match value {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(Error::Parse {
                    message: format!(
                        "top level must be a mapping of option names, found {}",
                        type_name(&other)
                    ),
                })
            }
        };

        let mut entries = BTreeMap::new();
        for (key, value) in mapping {
            let key = match key {
                Value::String(s) => s,
                other => {
                    return Err(Error::malformed(
                        describe_key(&other),
                        "option names must be strings",
                    ))
                }
            };
            let name: OptionName = key.parse()?;
            entries.insert(name, value);
        }

        Ok(Self { entries })
    }

    /// Returns the raw value for `name`, treating YAML null as absent.
    #[must_use]
    pub fn get(&self, name: OptionName) -> Option<&Value> {
        self.entries.get(&name).filter(|v| !v.is_null())
    }

    /// Set or replace the raw value for `name`.
    pub fn set(&mut self, name: OptionName, value: Value) {
        self.entries.insert(name, value);
    }

    /// Whether no option is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Value::is_null)
    }
}

/// Short human-readable name of a YAML value's type.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn describe_key(key: &Value) -> String {
    match key {
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => format!("<{}>", type_name(other)),
    }
}
