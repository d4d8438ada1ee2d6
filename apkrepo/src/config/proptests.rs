//! Property-based tests for the configuration loader.

use super::loader::ConfigLoader;
use super::schema::{OptionName, OptionValue, DEFAULT_JAVACC_PATH};
use crate::error::Error;
use proptest::prelude::*;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

// Non-blank path-like strings; YAML quoting is handled by serde_yaml.
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z/][a-zA-Z0-9/_. -]{0,30}"
}

fn app_id_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2,8}(\\.[a-z]{2,8}){1,3}"
}

fn alias_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}"
}

fn required_values() -> impl Strategy<Value = BTreeMap<OptionName, String>> {
    (
        text_strategy(),
        text_strategy(),
        text_strategy(),
        text_strategy(),
        text_strategy(),
        text_strategy(),
        text_strategy(),
    )
        .prop_map(|(aapt, sdk, ndk, name, keystore, storepass, keypass)| {
            BTreeMap::from([
                (OptionName::AaptPath, aapt),
                (OptionName::SdkPath, sdk),
                (OptionName::NdkPath, ndk),
                (OptionName::RepoUrl, "https://example.org/repo".to_string()),
                (OptionName::RepoName, name),
                (OptionName::Keystore, keystore),
                (OptionName::Keystorepass, storepass),
                (OptionName::Keypass, keypass),
                (OptionName::Keydname, "CN=Test, C=US".to_string()),
            ])
        })
}

fn render(values: &BTreeMap<OptionName, String>, aliases: &BTreeMap<String, String>) -> String {
    let mut mapping: Mapping = values
        .iter()
        .map(|(k, v)| (Value::String(k.as_str().into()), Value::String(v.clone())))
        .collect();
    mapping.insert(
        Value::String("keyaliases".into()),
        Value::Mapping(
            aliases
                .iter()
                .map(|(k, v)| (Value::String(k.clone()), Value::String(v.clone())))
                .collect(),
        ),
    );
    serde_yaml::to_string(&mapping).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Every supplied string comes back from `get` unchanged
    #[test]
    fn get_returns_supplied_values(
        values in required_values(),
        aliases in prop::collection::btree_map(app_id_strategy(), alias_strategy(), 0..5),
    ) {
        let config = ConfigLoader::load_str(&render(&values, &aliases)).unwrap();

        for (name, value) in &values {
            prop_assert_eq!(config.value(*name), OptionValue::Str(value.as_str()));
        }
        prop_assert_eq!(config.value(OptionName::JavaccPath), OptionValue::Str(DEFAULT_JAVACC_PATH));
        prop_assert_eq!(config.value(OptionName::Keyaliases), OptionValue::Map(&aliases));
    }

    // Alias resolution is exactly a lookup in the supplied mapping
    #[test]
    fn key_alias_resolution_matches_mapping(
        values in required_values(),
        aliases in prop::collection::btree_map(app_id_strategy(), alias_strategy(), 0..5),
        probe in app_id_strategy(),
    ) {
        let config = ConfigLoader::load_str(&render(&values, &aliases)).unwrap();

        prop_assert_eq!(config.resolve_key_alias(&probe), aliases.get(&probe).map(String::as_str));
        for (app_id, alias) in &aliases {
            prop_assert_eq!(config.resolve_key_alias(app_id), Some(alias.as_str()));
        }
    }

    // Dropping any required option reports exactly that option
    #[test]
    fn missing_required_option_is_named(
        values in required_values(),
        index in 0usize..9,
    ) {
        let mut values = values;
        let dropped = *values.keys().nth(index).unwrap();
        values.remove(&dropped);

        let err = ConfigLoader::load_str(&render(&values, &BTreeMap::new())).unwrap_err();
        let is_named = matches!(
            err,
            Error::MissingRequiredOption { ref name } if name == dropped.as_str()
        );
        prop_assert!(is_named);
    }
}
