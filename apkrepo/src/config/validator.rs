//! Configuration validation.
//!
//! Turns a [`SettingsDocument`] into a [`BuildConfiguration`], checking
//! required options, value types and the cross-field rules. Referenced paths
//! are deliberately left alone; see [`BuildConfiguration::require_path`].

use crate::config::document::{type_name, SettingsDocument};
use crate::config::schema::{
    BuildConfiguration, OptionName, RepoSigning, DEFAULT_JAVACC_PATH, PUBKEY_NOT_SET,
};
use crate::error::{Error, Result};
use crate::secret::SecretString;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Validates settings documents.
///
/// # Examples
///
/// ```
/// use apkrepo::config::SettingsDocument;
/// use apkrepo::{ConfigValidator, Error};
///
/// let doc = SettingsDocument::parse("repo_name: FDroid\n").unwrap();
/// let err = ConfigValidator::validate(&doc).unwrap_err();
/// assert!(matches!(err, Error::MissingRequiredOption { .. }));
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a settings document and build the configuration record.
    ///
    /// Required options are checked in schema order, so the first missing
    /// option is the one reported.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingRequiredOption`] if a required option is absent or null
    /// - [`Error::MalformedOption`] if a value has the wrong type, is empty,
    ///   or the `repo_keyalias`/`repo_pubkey` pair is inconsistent
    pub fn validate(doc: &SettingsDocument) -> Result<BuildConfiguration> {
        for name in OptionName::ALL {
            if name.is_required() && doc.get(name).is_none() {
                return Err(Error::MissingRequiredOption {
                    name: name.as_str().to_string(),
                });
            }
        }

        let required = |name: OptionName| -> Result<String> {
            let value = Self::string(doc, name)?.ok_or_else(|| Error::MissingRequiredOption {
                name: name.as_str().to_string(),
            })?;
            Self::validate_non_empty(name, &value)?;
            Ok(value)
        };

        let repo_url = required(OptionName::RepoUrl)?;
        Self::validate_url(&repo_url)?;

        let keydname = required(OptionName::Keydname)?;
        Self::validate_dname(&keydname)?;

        let javacc_path = match Self::string(doc, OptionName::JavaccPath)? {
            Some(path) => {
                Self::validate_non_empty(OptionName::JavaccPath, &path)?;
                path
            }
            None => DEFAULT_JAVACC_PATH.to_string(),
        };

        let signing = Self::validate_signing(
            Self::string(doc, OptionName::RepoKeyalias)?,
            Self::string(doc, OptionName::RepoPubkey)?,
        )?;

        Ok(BuildConfiguration {
            aapt_path: required(OptionName::AaptPath)?,
            sdk_path: required(OptionName::SdkPath)?,
            ndk_path: required(OptionName::NdkPath)?,
            javacc_path,
            repo_url,
            repo_name: required(OptionName::RepoName)?,
            repo_icon: Self::string(doc, OptionName::RepoIcon)?,
            repo_description: Self::string(doc, OptionName::RepoDescription)?,
            signing,
            keystore: required(OptionName::Keystore)?,
            keystorepass: SecretString::new(required(OptionName::Keystorepass)?),
            keypass: SecretString::new(required(OptionName::Keypass)?),
            keydname,
            keyaliases: Self::key_aliases(doc)?,
        })
    }

    /// Read a string option, rejecting any other YAML type.
    fn string(doc: &SettingsDocument, name: OptionName) -> Result<Option<String>> {
        match doc.get(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(Error::malformed(
                name.as_str(),
                format!("expected a string, found {}", type_name(other)),
            )),
        }
    }

    /// Check that a value is not empty or only whitespace.
    fn validate_non_empty(name: OptionName, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::malformed(
                name.as_str(),
                "cannot be empty or only whitespace",
            ));
        }
        if value.contains('\0') {
            return Err(Error::malformed(name.as_str(), "cannot contain null bytes"));
        }
        Ok(())
    }

    /// Check that `repo_url` has the shape `scheme://rest`.
    fn validate_url(url: &str) -> Result<()> {
        let valid = url.split_once("://").is_some_and(|(scheme, rest)| {
            !rest.is_empty()
                && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        });

        if valid {
            Ok(())
        } else {
            Err(Error::malformed(
                OptionName::RepoUrl.as_str(),
                format!("'{url}' is not an absolute URL"),
            ))
        }
    }

    /// Check that `keydname` is a comma-separated list of `ATTR=value`.
    ///
    /// Commas escaped with `\` or inside double quotes belong to the value.
    /// The name itself is passed through untouched.
    fn validate_dname(dname: &str) -> Result<()> {
        for component in dname_components(dname) {
            let well_formed = component.split_once('=').is_some_and(|(attr, value)| {
                let attr = attr.trim();
                !attr.is_empty()
                    && !value.trim().is_empty()
                    && attr
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '.')
            });

            if !well_formed {
                return Err(Error::malformed(
                    OptionName::Keydname.as_str(),
                    format!(
                        "'{}' is not an ATTR=value component (expected e.g. \"CN=Name, O=Org, C=US\")",
                        component.trim()
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Resolve the `repo_keyalias`/`repo_pubkey` pair.
    ///
    /// The pubkey sentinel is compared literally: `"not set"` means unset,
    /// an empty string does not.
    fn validate_signing(keyalias: Option<String>, pubkey: Option<String>) -> Result<RepoSigning> {
        if let Some(ref keyalias) = keyalias {
            Self::validate_non_empty(OptionName::RepoKeyalias, keyalias)?;
        }
        let pubkey = pubkey.filter(|key| key != PUBKEY_NOT_SET);

        match (keyalias, pubkey) {
            (None, None) => Ok(RepoSigning::Unsigned),
            (None, Some(_)) => Err(Error::malformed(
                OptionName::RepoPubkey.as_str(),
                "set without repo_keyalias; an unsigned repository must leave it unset",
            )),
            (Some(_), None) => Err(Error::malformed(
                OptionName::RepoPubkey.as_str(),
                "required when repo_keyalias is set",
            )),
            (Some(keyalias), Some(pubkey)) => {
                Self::validate_pubkey(&pubkey)?;
                Ok(RepoSigning::Signed { keyalias, pubkey })
            }
        }
    }

    /// Check that a public key is an even-length hex string.
    fn validate_pubkey(pubkey: &str) -> Result<()> {
        let reason = if pubkey.is_empty() {
            Some("cannot be empty")
        } else if !pubkey.chars().all(|c| c.is_ascii_hexdigit()) {
            Some("must be a hex string")
        } else if pubkey.len() % 2 != 0 {
            Some("hex string must have an even number of digits")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::malformed(OptionName::RepoPubkey.as_str(), reason)),
            None => Ok(()),
        }
    }

    /// Read `keyaliases` as a string-to-string mapping with non-empty aliases.
    fn key_aliases(doc: &SettingsDocument) -> Result<BTreeMap<String, String>> {
        let name = OptionName::Keyaliases.as_str();
        let mapping = match doc.get(OptionName::Keyaliases) {
            None => return Ok(BTreeMap::new()),
            Some(Value::Mapping(mapping)) => mapping,
            Some(other) => {
                return Err(Error::malformed(
                    name,
                    format!("expected a mapping, found {}", type_name(other)),
                ))
            }
        };

        let mut aliases = BTreeMap::new();
        for (app_id, alias) in mapping {
            let Value::String(app_id) = app_id else {
                return Err(Error::malformed(
                    name,
                    format!("application ids must be strings, found {}", type_name(app_id)),
                ));
            };
            let Value::String(alias) = alias else {
                return Err(Error::malformed(
                    name,
                    format!(
                        "alias for '{app_id}' must be a string, found {}",
                        type_name(alias)
                    ),
                ));
            };
            if alias.trim().is_empty() {
                return Err(Error::malformed(
                    name,
                    format!("alias for '{app_id}' cannot be empty"),
                ));
            }
            aliases.insert(app_id.clone(), alias.clone());
        }

        Ok(aliases)
    }
}

/// Split a distinguished name on its separating commas.
fn dname_components(dname: &str) -> Vec<&str> {
    let mut components = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    let mut quoted = false;

    for (i, c) in dname.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => quoted = !quoted,
            ',' if !quoted => {
                components.push(&dname[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    components.push(&dname[start..]);
    components
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "\
aapt_path: /sdk/tools/aapt
sdk_path: /sdk
ndk_path: /ndk
repo_url: http://f-droid.org/repo
repo_name: FDroid
keystore: /keys/my.keystore
keystorepass: foo
keypass: foo2
keydname: CN=Birdman, OU=Cell, O=Alcatraz, L=Alcatraz, S=California, C=US
";

    fn validate(extra: &str) -> Result<BuildConfiguration> {
        let doc = SettingsDocument::parse(&format!("{BASE}{extra}")).unwrap();
        ConfigValidator::validate(&doc)
    }

    fn malformed_name(err: &Error) -> &str {
        match err {
            Error::MalformedOption { name, .. } => name,
            other => panic!("expected MalformedOption, got {other:?}"),
        }
    }

    #[test]
    fn test_minimal_document_is_valid() {
        let config = validate("").unwrap();
        assert_eq!(config.javacc_path, DEFAULT_JAVACC_PATH);
        assert_eq!(config.signing, RepoSigning::Unsigned);
        assert!(config.keyaliases.is_empty());
    }

    #[test]
    fn test_missing_required_reports_first_in_schema_order() {
        let doc = SettingsDocument::parse("repo_name: FDroid\n").unwrap();
        let err = ConfigValidator::validate(&doc).unwrap_err();
        assert!(matches!(err, Error::MissingRequiredOption { ref name } if name == "aapt_path"));
    }

    #[test]
    fn test_null_required_is_missing() {
        let source = BASE.replace("keypass: foo2", "keypass: ~");
        let doc = SettingsDocument::parse(&source).unwrap();
        let err = ConfigValidator::validate(&doc).unwrap_err();
        assert!(matches!(err, Error::MissingRequiredOption { ref name } if name == "keypass"));
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let source = BASE.replace("repo_name: FDroid", "repo_name: [a, b]");
        let doc = SettingsDocument::parse(&source).unwrap();
        let err = ConfigValidator::validate(&doc).unwrap_err();
        assert_eq!(malformed_name(&err), "repo_name");
        assert!(err.to_string().contains("a list"));
    }

    #[test]
    fn test_unquoted_number_is_malformed() {
        let source = BASE.replace("keystorepass: foo", "keystorepass: 1234");
        let doc = SettingsDocument::parse(&source).unwrap();
        let err = ConfigValidator::validate(&doc).unwrap_err();
        assert_eq!(malformed_name(&err), "keystorepass");
    }

    #[test]
    fn test_empty_required_is_malformed() {
        let source = BASE.replace("sdk_path: /sdk", "sdk_path: \"  \"");
        let doc = SettingsDocument::parse(&source).unwrap();
        let err = ConfigValidator::validate(&doc).unwrap_err();
        assert_eq!(malformed_name(&err), "sdk_path");
    }

    #[test]
    fn test_invalid_url() {
        let source = BASE.replace("http://f-droid.org/repo", "f-droid.org/repo");
        let doc = SettingsDocument::parse(&source).unwrap();
        let err = ConfigValidator::validate(&doc).unwrap_err();
        assert_eq!(malformed_name(&err), "repo_url");
    }

    #[test]
    fn test_url_schemes() {
        assert!(ConfigValidator::validate_url("https://example.org/fdroid/repo").is_ok());
        assert!(ConfigValidator::validate_url("file:///srv/repo").is_ok());
        assert!(ConfigValidator::validate_url("://example.org").is_err());
        assert!(ConfigValidator::validate_url("http://").is_err());
    }

    #[test]
    fn test_dname_shapes() {
        assert!(ConfigValidator::validate_dname("CN=Birdman").is_ok());
        assert!(ConfigValidator::validate_dname("CN=A,OU=B, 2.5.4.3=C").is_ok());
        assert!(ConfigValidator::validate_dname("Birdman").is_err());
        assert!(ConfigValidator::validate_dname("CN=Birdman,").is_err());
        assert!(ConfigValidator::validate_dname("=x").is_err());
    }

    #[test]
    fn test_dname_escaped_and_quoted_commas() {
        assert!(ConfigValidator::validate_dname(r"CN=Doe\, John, O=Acme, C=US").is_ok());
        assert!(ConfigValidator::validate_dname(r#"CN="Doe, John", O=Acme"#).is_ok());
        assert!(ConfigValidator::validate_dname(r#"CN="Doe, John", Acme"#).is_err());

        let text = BASE.replace(
            "keydname: CN=Birdman, OU=Cell, O=Alcatraz, L=Alcatraz, S=California, C=US",
            r"keydname: 'CN=Doe\, John, O=Acme, C=US'",
        );
        let doc = SettingsDocument::parse(&text).unwrap();
        let config = ConfigValidator::validate(&doc).unwrap();
        assert_eq!(config.keydname, r"CN=Doe\, John, O=Acme, C=US");
    }

    #[test]
    fn test_dname_passed_through_verbatim() {
        let config = validate("").unwrap();
        assert_eq!(
            config.keydname,
            "CN=Birdman, OU=Cell, O=Alcatraz, L=Alcatraz, S=California, C=US"
        );
    }

    #[test]
    fn test_signed_repository() {
        let config = validate("repo_keyalias: repokey\nrepo_pubkey: 308201a2\n").unwrap();
        assert_eq!(
            config.signing,
            RepoSigning::Signed {
                keyalias: "repokey".to_string(),
                pubkey: "308201a2".to_string(),
            }
        );
    }

    #[test]
    fn test_keyalias_with_sentinel_pubkey_is_malformed() {
        let err = validate("repo_keyalias: repokey\nrepo_pubkey: not set\n").unwrap_err();
        assert_eq!(malformed_name(&err), "repo_pubkey");
    }

    #[test]
    fn test_empty_keyalias_is_reported_on_keyalias() {
        let err = validate("repo_keyalias: ''\n").unwrap_err();
        assert_eq!(malformed_name(&err), "repo_keyalias");
    }

    #[test]
    fn test_keyalias_without_pubkey_is_malformed() {
        let err = validate("repo_keyalias: repokey\n").unwrap_err();
        assert_eq!(malformed_name(&err), "repo_pubkey");
    }

    #[test]
    fn test_pubkey_without_keyalias_is_malformed() {
        let err = validate("repo_keyalias: ~\nrepo_pubkey: '3082'\n").unwrap_err();
        assert_eq!(malformed_name(&err), "repo_pubkey");
    }

    #[test]
    fn test_sentinel_pubkey_without_keyalias_is_unsigned() {
        let config = validate("repo_keyalias: null\nrepo_pubkey: not set\n").unwrap();
        assert_eq!(config.signing, RepoSigning::Unsigned);
    }

    #[test]
    fn test_empty_pubkey_is_not_the_sentinel() {
        let err = validate("repo_keyalias: repokey\nrepo_pubkey: \"\"\n").unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_non_hex_pubkey() {
        let err = validate("repo_keyalias: repokey\nrepo_pubkey: xyz123\n").unwrap_err();
        assert!(err.to_string().contains("hex"));

        let err = validate("repo_keyalias: repokey\nrepo_pubkey: abc\n").unwrap_err();
        assert!(err.to_string().contains("even"));
    }

    #[test]
    fn test_key_aliases() {
        let config =
            validate("keyaliases:\n  com.example.app: example\n  org.other: other\n").unwrap();
        assert_eq!(config.keyaliases.len(), 2);
        assert_eq!(config.keyaliases["com.example.app"], "example");
    }

    #[test]
    fn test_empty_key_aliases_mapping() {
        let config = validate("keyaliases: {}\n").unwrap();
        assert!(config.keyaliases.is_empty());
    }

    #[test]
    fn test_key_aliases_not_a_mapping() {
        let err = validate("keyaliases: [com.example.app]\n").unwrap_err();
        assert_eq!(malformed_name(&err), "keyaliases");
    }

    #[test]
    fn test_key_alias_must_be_non_empty_string() {
        let err = validate("keyaliases:\n  com.example.app: \"\"\n").unwrap_err();
        assert!(err.to_string().contains("com.example.app"));

        let err = validate("keyaliases:\n  com.example.app: 7\n").unwrap_err();
        assert!(err.to_string().contains("a number"));
    }
}
