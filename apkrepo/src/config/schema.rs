//! Configuration schema definitions.
//!
//! This module defines the recognized option names, their defaults, and the
//! validated [`BuildConfiguration`] record handed to every consumer.

use crate::error::{Error, Result};
use crate::secret::{SecretString, REDACTED};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default location of the Java compiler-compiler tools.
pub const DEFAULT_JAVACC_PATH: &str = "/usr/share/java";

/// Placeholder `repo_pubkey` value meaning "intentionally not set".
pub const PUBKEY_NOT_SET: &str = "not set";

/// A recognized option in the settings document.
///
/// # Examples
///
/// ```
/// use apkrepo::OptionName;
///
/// let name: OptionName = "repo_keyalias".parse().unwrap();
/// assert_eq!(name, OptionName::RepoKeyalias);
/// assert!(!name.is_required());
/// assert!("foo_bar".parse::<OptionName>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionName {
    /// Path to the `aapt` binary.
    AaptPath,
    /// Android SDK root.
    SdkPath,
    /// Android NDK root.
    NdkPath,
    /// Java compiler-compiler tools location.
    JavaccPath,
    /// Public base URL of the repository.
    RepoUrl,
    /// Display name of the repository.
    RepoName,
    /// Icon file for the repository.
    RepoIcon,
    /// Free-text repository description.
    RepoDescription,
    /// Alias of the key signing the repository index.
    RepoKeyalias,
    /// Public key matching `repo_keyalias`.
    RepoPubkey,
    /// Keystore holding all signing keys.
    Keystore,
    /// Keystore password.
    Keystorepass,
    /// Password shared by auto-generated keys.
    Keypass,
    /// Distinguished name used when generating keys.
    Keydname,
    /// Per-application key alias overrides.
    Keyaliases,
}

impl OptionName {
    /// Every option, in settings-document order.
    pub const ALL: [Self; 15] = [
        Self::AaptPath,
        Self::SdkPath,
        Self::NdkPath,
        Self::JavaccPath,
        Self::RepoUrl,
        Self::RepoName,
        Self::RepoIcon,
        Self::RepoDescription,
        Self::RepoKeyalias,
        Self::RepoPubkey,
        Self::Keystore,
        Self::Keystorepass,
        Self::Keypass,
        Self::Keydname,
        Self::Keyaliases,
    ];

    /// The option's key as written in the settings document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AaptPath => "aapt_path",
            Self::SdkPath => "sdk_path",
            Self::NdkPath => "ndk_path",
            Self::JavaccPath => "javacc_path",
            Self::RepoUrl => "repo_url",
            Self::RepoName => "repo_name",
            Self::RepoIcon => "repo_icon",
            Self::RepoDescription => "repo_description",
            Self::RepoKeyalias => "repo_keyalias",
            Self::RepoPubkey => "repo_pubkey",
            Self::Keystore => "keystore",
            Self::Keystorepass => "keystorepass",
            Self::Keypass => "keypass",
            Self::Keydname => "keydname",
            Self::Keyaliases => "keyaliases",
        }
    }

    /// Whether loading fails when the option is absent.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            Self::AaptPath
                | Self::SdkPath
                | Self::NdkPath
                | Self::RepoUrl
                | Self::RepoName
                | Self::Keystore
                | Self::Keystorepass
                | Self::Keypass
                | Self::Keydname
        )
    }

    /// Whether the option names a filesystem location checked at point of use.
    #[must_use]
    pub const fn is_path(self) -> bool {
        matches!(
            self,
            Self::AaptPath | Self::SdkPath | Self::NdkPath | Self::JavaccPath | Self::Keystore
        )
    }

    /// Whether the option holds a password.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Keystorepass | Self::Keypass)
    }

    /// Whether the option holds a single string (everything but `keyaliases`).
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !matches!(self, Self::Keyaliases)
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OptionName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| Error::UnknownOption { name: s.to_string() })
    }
}

/// The value of one option, as returned by [`BuildConfiguration::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue<'a> {
    /// A string option (paths, URLs, names, secrets).
    Str(&'a str),
    /// An optional option that was not supplied and has no default.
    Unset,
    /// The `keyaliases` mapping.
    Map(&'a BTreeMap<String, String>),
}

impl<'a> OptionValue<'a> {
    /// Returns the string value, if this is a string option that is set.
    #[must_use]
    pub const fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Str(s) => Some(*s),
            _ => None,
        }
    }

    /// Whether the option is unset.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

/// How the repository index is signed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RepoSigning {
    /// No signing key configured; `repo_pubkey` is at its sentinel.
    #[default]
    Unsigned,
    /// The index is signed with `keyalias` from the keystore.
    Signed {
        /// Alias of the signing key.
        keyalias: String,
        /// Hex-encoded public key matching the signing key.
        pubkey: String,
    },
}

/// Existence of one configured path, as reported by
/// [`BuildConfiguration::path_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStatus {
    /// The path option.
    pub option: OptionName,
    /// The configured path.
    pub path: PathBuf,
    /// Whether the path exists right now.
    pub exists: bool,
}

/// The validated build configuration.
///
/// Constructed once by [`ConfigLoader`](crate::ConfigLoader) and read-only
/// afterwards. String fields are kept exactly as supplied.
///
/// # Examples
///
/// ```
/// use apkrepo::{ConfigLoader, OptionValue};
///
/// let config = ConfigLoader::load_str(apkrepo::config::template::SAMPLE_CONFIG).unwrap();
/// assert_eq!(config.repo_name(), "FDroid");
/// assert_eq!(config.get("repo_keyalias").unwrap(), OptionValue::Unset);
/// assert_eq!(config.get("repo_pubkey").unwrap(), OptionValue::Str("not set"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfiguration {
    pub(crate) aapt_path: String,
    pub(crate) sdk_path: String,
    pub(crate) ndk_path: String,
    pub(crate) javacc_path: String,
    pub(crate) repo_url: String,
    pub(crate) repo_name: String,
    pub(crate) repo_icon: Option<String>,
    pub(crate) repo_description: Option<String>,
    pub(crate) signing: RepoSigning,
    pub(crate) keystore: String,
    pub(crate) keystorepass: SecretString,
    pub(crate) keypass: SecretString,
    pub(crate) keydname: String,
    pub(crate) keyaliases: BTreeMap<String, String>,
}

impl BuildConfiguration {
    /// Look up an option by its settings-document key.
    ///
    /// Returns the configured value or the documented default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOption`] if `key` is not part of the schema.
    pub fn get(&self, key: &str) -> Result<OptionValue<'_>> {
        let name: OptionName = key.parse()?;
        Ok(self.value(name))
    }

    /// Typed variant of [`get`](Self::get).
    #[must_use]
    pub fn value(&self, name: OptionName) -> OptionValue<'_> {
        match name {
            OptionName::AaptPath => OptionValue::Str(&self.aapt_path),
            OptionName::SdkPath => OptionValue::Str(&self.sdk_path),
            OptionName::NdkPath => OptionValue::Str(&self.ndk_path),
            OptionName::JavaccPath => OptionValue::Str(&self.javacc_path),
            OptionName::RepoUrl => OptionValue::Str(&self.repo_url),
            OptionName::RepoName => OptionValue::Str(&self.repo_name),
            OptionName::RepoIcon => optional(self.repo_icon.as_deref()),
            OptionName::RepoDescription => optional(self.repo_description.as_deref()),
            OptionName::RepoKeyalias => optional(self.repo_keyalias()),
            OptionName::RepoPubkey => OptionValue::Str(self.repo_pubkey()),
            OptionName::Keystore => OptionValue::Str(&self.keystore),
            OptionName::Keystorepass => OptionValue::Str(self.keystorepass.expose_secret()),
            OptionName::Keypass => OptionValue::Str(self.keypass.expose_secret()),
            OptionName::Keydname => OptionValue::Str(&self.keydname),
            OptionName::Keyaliases => OptionValue::Map(&self.keyaliases),
        }
    }

    /// Returns the key alias override for `application_id`, if any.
    ///
    /// `None` means the caller should fall back to its own alias scheme.
    #[must_use]
    pub fn resolve_key_alias(&self, application_id: &str) -> Option<&str> {
        self.keyaliases.get(application_id).map(String::as_str)
    }

    /// Returns the configured path for `option`, checking that it exists.
    ///
    /// Paths are not checked at load time, so consumers call this right
    /// before using a tool or the keystore.
    ///
    /// # Errors
    ///
    /// - [`Error::PathNotFound`] if the path does not exist
    /// - [`Error::MalformedOption`] if `option` is not a path option
    pub fn require_path(&self, option: OptionName) -> Result<&Path> {
        let path = self
            .path_of(option)
            .ok_or_else(|| Error::malformed(option.as_str(), "not a path option"))?;

        if path.exists() {
            Ok(path)
        } else {
            Err(Error::PathNotFound {
                option: option.as_str().to_string(),
                path: path.to_path_buf(),
            })
        }
    }

    /// Reports whether each path option currently exists.
    #[must_use]
    pub fn path_report(&self) -> Vec<PathStatus> {
        OptionName::ALL
            .into_iter()
            .filter_map(|option| {
                self.path_of(option).map(|path| PathStatus {
                    option,
                    path: path.to_path_buf(),
                    exists: path.exists(),
                })
            })
            .collect()
    }

    fn path_of(&self, option: OptionName) -> Option<&Path> {
        if !option.is_path() {
            return None;
        }
        self.value(option).as_str().map(Path::new)
    }

    /// Renders the configuration as a YAML mapping in schema order.
    ///
    /// Passwords are replaced by `[REDACTED]` unless `reveal_secrets` is set.
    /// Unset optional options are omitted.
    #[must_use]
    pub fn to_document(&self, reveal_secrets: bool) -> serde_yaml::Mapping {
        use serde_yaml::Value;

        let mut mapping = serde_yaml::Mapping::new();
        for name in OptionName::ALL {
            let value = match self.value(name) {
                OptionValue::Unset => continue,
                OptionValue::Str(_) if name.is_secret() && !reveal_secrets => {
                    Value::String(REDACTED.to_string())
                }
                OptionValue::Str(s) => Value::String(s.to_string()),
                OptionValue::Map(map) => Value::Mapping(
                    map.iter()
                        .map(|(k, v)| (Value::String(k.clone()), Value::String(v.clone())))
                        .collect(),
                ),
            };
            mapping.insert(Value::String(name.as_str().to_string()), value);
        }
        mapping
    }

    /// Path to the `aapt` binary.
    #[must_use]
    pub fn aapt_path(&self) -> &Path {
        Path::new(&self.aapt_path)
    }

    /// Android SDK root.
    #[must_use]
    pub fn sdk_path(&self) -> &Path {
        Path::new(&self.sdk_path)
    }

    /// Android NDK root.
    #[must_use]
    pub fn ndk_path(&self) -> &Path {
        Path::new(&self.ndk_path)
    }

    /// Java compiler-compiler tools location.
    #[must_use]
    pub fn javacc_path(&self) -> &Path {
        Path::new(&self.javacc_path)
    }

    /// Public base URL of the repository.
    #[must_use]
    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }

    /// Display name of the repository.
    #[must_use]
    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    /// Repository icon file name.
    #[must_use]
    pub fn repo_icon(&self) -> Option<&str> {
        self.repo_icon.as_deref()
    }

    /// Repository description, verbatim.
    #[must_use]
    pub fn repo_description(&self) -> Option<&str> {
        self.repo_description.as_deref()
    }

    /// How the repository index is signed.
    #[must_use]
    pub fn signing(&self) -> &RepoSigning {
        &self.signing
    }

    /// Whether a repository signing key is configured.
    #[must_use]
    pub fn is_signed(&self) -> bool {
        matches!(self.signing, RepoSigning::Signed { .. })
    }

    /// Alias of the repository signing key, `None` for an unsigned repository.
    #[must_use]
    pub fn repo_keyalias(&self) -> Option<&str> {
        match &self.signing {
            RepoSigning::Signed { keyalias, .. } => Some(keyalias),
            RepoSigning::Unsigned => None,
        }
    }

    /// Repository public key, or [`PUBKEY_NOT_SET`] for an unsigned repository.
    #[must_use]
    pub fn repo_pubkey(&self) -> &str {
        match &self.signing {
            RepoSigning::Signed { pubkey, .. } => pubkey,
            RepoSigning::Unsigned => PUBKEY_NOT_SET,
        }
    }

    /// Path to the keystore.
    #[must_use]
    pub fn keystore(&self) -> &Path {
        Path::new(&self.keystore)
    }

    /// Keystore password.
    #[must_use]
    pub fn keystorepass(&self) -> &SecretString {
        &self.keystorepass
    }

    /// Password shared by auto-generated keys.
    #[must_use]
    pub fn keypass(&self) -> &SecretString {
        &self.keypass
    }

    /// Distinguished name for generated keys, verbatim.
    #[must_use]
    pub fn keydname(&self) -> &str {
        &self.keydname
    }

    /// All per-application key alias overrides.
    #[must_use]
    pub fn keyaliases(&self) -> &BTreeMap<String, String> {
        &self.keyaliases
    }
}

fn optional(value: Option<&str>) -> OptionValue<'_> {
    value.map_or(OptionValue::Unset, OptionValue::Str)
}
