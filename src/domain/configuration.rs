//! Configuration: the full set of named settings handed to the site generator

use super::error::{SettingsError, ROOT_PATH};
use super::value::SettingValue;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Mapping from setting name to value.
///
/// Keys are kept sorted so serialized output is stable across runs. There are
/// no in-place mutators: a configuration is built once and then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Configuration {
    settings: BTreeMap<String, SettingValue>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a configuration with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.settings.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.settings.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.settings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, SettingValue> {
        self.settings.iter()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(self.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
    }

    pub fn from_json(document: &serde_json::Value) -> Result<Self, SettingsError> {
        let serde_json::Value::Object(map) = document else {
            return Err(not_a_mapping());
        };
        map.iter()
            .map(|(key, value)| -> Result<_, SettingsError> {
                Ok((key.clone(), SettingValue::from_json(key, value)?))
            })
            .collect()
    }

    pub fn from_toml(table: &toml::Table) -> Result<Self, SettingsError> {
        table
            .iter()
            .map(|(key, value)| -> Result<_, SettingsError> {
                Ok((key.clone(), SettingValue::from_toml(key, value)?))
            })
            .collect()
    }

    pub fn from_yaml(document: &serde_yaml::Value) -> Result<Self, SettingsError> {
        match document {
            // An empty YAML file parses as null.
            serde_yaml::Value::Null => Ok(Self::default()),
            serde_yaml::Value::Mapping(_) => match SettingValue::from_yaml("", document)? {
                SettingValue::Mapping(settings) => Ok(Self { settings }),
                _ => Err(not_a_mapping()),
            },
            _ => Err(not_a_mapping()),
        }
    }
}

fn not_a_mapping() -> SettingsError {
    SettingsError::invalid(ROOT_PATH, "configuration must be a mapping of setting names to values")
}

impl FromIterator<(String, SettingValue)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (String, SettingValue)>>(iter: I) -> Self {
        Self { settings: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = (&'a String, &'a SettingValue);
    type IntoIter = btree_map::Iter<'a, String, SettingValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.settings.iter()
    }
}

impl<'de> Deserialize<'de> for Configuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Configuration::from_json(&raw).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<&serde_json::Value> for Configuration {
    type Error = SettingsError;

    fn try_from(document: &serde_json::Value) -> Result<Self, Self::Error> {
        Configuration::from_json(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_and_lookup() {
        let config = Configuration::new()
            .with("SITENAME", "Hackingmood")
            .with("DEFAULT_PAGINATION", 10_i64)
            .with("RELATIVE_URLS", true);

        assert_eq!(config.len(), 3);
        assert_eq!(config.get("SITENAME").and_then(SettingValue::as_str), Some("Hackingmood"));
        assert_eq!(config.get("DEFAULT_PAGINATION").and_then(SettingValue::as_i64), Some(10));
        assert!(config.get("THEME").is_none());
    }

    #[test]
    fn test_keys_are_sorted() {
        let config =
            Configuration::new().with("THEME", "theme").with("AUTHOR", "M").with("PATH", "content");
        let keys: Vec<&str> = config.keys().collect();
        assert_eq!(keys, ["AUTHOR", "PATH", "THEME"]);
    }

    #[test]
    fn test_from_json_rejects_non_mapping() {
        let err = Configuration::from_json(&json!(["SITENAME"])).unwrap_err();
        assert_eq!(err.key(), ROOT_PATH);
    }

    #[test]
    fn test_from_json_error_uses_top_level_key() {
        let err = Configuration::from_json(&json!({"TIMEZONE": "UTC", "RATIO": 1.5})).unwrap_err();
        assert_eq!(err.key(), "RATIO");
    }

    #[test]
    fn test_from_yaml_empty_document_is_empty_config() {
        let doc: serde_yaml::Value = serde_yaml::from_str("").unwrap();
        assert!(Configuration::from_yaml(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_from_yaml_scalar_document_rejected() {
        let doc: serde_yaml::Value = serde_yaml::from_str("just a string").unwrap();
        let err = Configuration::from_yaml(&doc).unwrap_err();
        assert_eq!(err.key(), ROOT_PATH);
    }

    #[test]
    fn test_from_yaml_nested_error_path_has_no_leading_dot() {
        let doc: serde_yaml::Value =
            serde_yaml::from_str("MARKDOWN:\n  output_format: 5.0\n").unwrap();
        let err = Configuration::from_yaml(&doc).unwrap_err();
        assert_eq!(err.key(), "MARKDOWN.output_format");
    }

    #[test]
    fn test_json_round_trip_through_serde() {
        let config = Configuration::new()
            .with("FEED_ALL_ATOM", SettingValue::Null)
            .with("PLUGINS", vec!["assets", "post_stats"]);
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(text, r#"{"FEED_ALL_ATOM":null,"PLUGINS":["assets","post_stats"]}"#);
        let back: Configuration = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
