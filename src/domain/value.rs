//! Setting values and shape validation
//!
//! Every file format is converted into [`SettingValue`] through the same
//! rules, so a float is rejected whether it came from TOML, YAML or JSON.

use super::error::{SettingsError, ROOT_PATH};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Null,
    Bool(bool),
    Integer(i64),
    String(String),
    Sequence(Vec<String>),
    Mapping(BTreeMap<String, SettingValue>),
}

impl SettingValue {
    /// Short name of the shape, used in error messages and diff output.
    pub fn kind(&self) -> &'static str {
        match self {
            SettingValue::Null => "null",
            SettingValue::Bool(_) => "boolean",
            SettingValue::Integer(_) => "integer",
            SettingValue::String(_) => "string",
            SettingValue::Sequence(_) => "sequence",
            SettingValue::Mapping(_) => "mapping",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SettingValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SettingValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            SettingValue::Null => Value::Null,
            SettingValue::Bool(b) => Value::Bool(*b),
            SettingValue::Integer(n) => Value::Number((*n).into()),
            SettingValue::String(s) => Value::String(s.clone()),
            SettingValue::Sequence(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            SettingValue::Mapping(map) => {
                Value::Object(map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
            }
        }
    }

    /// Convert a JSON value, rejecting shapes a setting cannot hold.
    ///
    /// `path` names the value in errors and is extended for nested entries.
    pub fn from_json(path: &str, value: &serde_json::Value) -> Result<Self, SettingsError> {
        use serde_json::Value;
        match value {
            Value::Null => Ok(SettingValue::Null),
            Value::Bool(b) => Ok(SettingValue::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(SettingValue::Integer)
                .ok_or_else(|| number_error(path, n.is_u64(), n)),
            Value::String(s) => Ok(SettingValue::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(sequence_item_error(path, i, json_kind(other))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(SettingValue::Sequence),
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| -> Result<_, SettingsError> {
                    Ok((k.clone(), Self::from_json(&child_path(path, k), v)?))
                })
                .collect::<Result<BTreeMap<_, _>, SettingsError>>()
                .map(SettingValue::Mapping),
        }
    }

    /// Convert a TOML value. TOML has no null, and datetimes are rejected.
    pub fn from_toml(path: &str, value: &toml::Value) -> Result<Self, SettingsError> {
        use toml::Value;
        match value {
            Value::Boolean(b) => Ok(SettingValue::Bool(*b)),
            Value::Integer(n) => Ok(SettingValue::Integer(*n)),
            Value::String(s) => Ok(SettingValue::String(s.clone())),
            Value::Float(f) => {
                Err(SettingsError::invalid(path, format!("expected an integer, found float {f}")))
            }
            Value::Datetime(dt) => Err(SettingsError::invalid(
                path,
                format!("datetimes are not supported, found {dt}"),
            )),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(sequence_item_error(path, i, other.type_str())),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(SettingValue::Sequence),
            Value::Table(table) => table
                .iter()
                .map(|(k, v)| -> Result<_, SettingsError> {
                    Ok((k.clone(), Self::from_toml(&child_path(path, k), v)?))
                })
                .collect::<Result<BTreeMap<_, _>, SettingsError>>()
                .map(SettingValue::Mapping),
        }
    }

    /// Convert a YAML value. Mapping keys must be strings; tags are rejected.
    pub fn from_yaml(path: &str, value: &serde_yaml::Value) -> Result<Self, SettingsError> {
        use serde_yaml::Value;
        match value {
            Value::Null => Ok(SettingValue::Null),
            Value::Bool(b) => Ok(SettingValue::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(SettingValue::Integer)
                .ok_or_else(|| number_error(path, n.is_u64(), n)),
            Value::String(s) => Ok(SettingValue::String(s.clone())),
            Value::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(sequence_item_error(path, i, yaml_kind(other))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(SettingValue::Sequence),
            Value::Mapping(map) => {
                let mut out = BTreeMap::new();
                for (k, v) in map {
                    let Some(key) = k.as_str() else {
                        let at = if path.is_empty() { ROOT_PATH } else { path };
                        return Err(SettingsError::invalid(
                            at,
                            format!("mapping keys must be strings, found {}", yaml_kind(k)),
                        ));
                    };
                    out.insert(key.to_string(), Self::from_yaml(&child_path(path, key), v)?);
                }
                Ok(SettingValue::Mapping(out))
            }
            Value::Tagged(tagged) => Err(SettingsError::invalid(
                path,
                format!("tagged values are not supported, found tag {}", tagged.tag),
            )),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl<'de> Deserialize<'de> for SettingValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        SettingValue::from_json(ROOT_PATH, &raw).map_err(serde::de::Error::custom)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::String(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Integer(value)
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(value: Vec<String>) -> Self {
        SettingValue::Sequence(value)
    }
}

impl From<Vec<&str>> for SettingValue {
    fn from(value: Vec<&str>) -> Self {
        SettingValue::Sequence(value.into_iter().map(str::to_string).collect())
    }
}

impl From<BTreeMap<String, SettingValue>> for SettingValue {
    fn from(value: BTreeMap<String, SettingValue>) -> Self {
        SettingValue::Mapping(value)
    }
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn sequence_item_error(path: &str, index: usize, found: &str) -> SettingsError {
    SettingsError::invalid(
        format!("{path}[{index}]"),
        format!("sequence items must be strings, found {found}"),
    )
}

/// A number that did not fit an `i64`: either a float or an integer above `i64::MAX`.
fn number_error(path: &str, is_integer: bool, n: impl fmt::Display) -> SettingsError {
    if is_integer {
        SettingsError::invalid(path, format!("integer out of range for a setting, found {n}"))
    } else {
        SettingsError::invalid(path, format!("expected an integer, found number {n}"))
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    use serde_yaml::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_scalars_convert() {
        assert_eq!(SettingValue::from_json("A", &json!(null)).unwrap(), SettingValue::Null);
        assert_eq!(SettingValue::from_json("A", &json!(false)).unwrap(), SettingValue::Bool(false));
        assert_eq!(SettingValue::from_json("A", &json!(10)).unwrap(), SettingValue::Integer(10));
        assert_eq!(
            SettingValue::from_json("A", &json!("content")).unwrap(),
            SettingValue::from("content")
        );
    }

    #[test]
    fn test_json_float_is_rejected() {
        let err = SettingValue::from_json("DEFAULT_PAGINATION", &json!(2.5)).unwrap_err();
        assert_eq!(err.key(), "DEFAULT_PAGINATION");
        assert!(err.to_string().contains("found number 2.5"));
    }

    #[test]
    fn test_sequence_keeps_order() {
        let value = SettingValue::from_json(
            "STATIC_PATHS",
            &json!(["images", "extra/robots.txt", "extra/favicon.ico"]),
        )
        .unwrap();
        assert_eq!(
            value,
            SettingValue::from(vec!["images", "extra/robots.txt", "extra/favicon.ico"])
        );
    }

    #[test]
    fn test_mixed_sequence_reports_item_index() {
        let err = SettingValue::from_json("PLUGINS", &json!(["assets", 3])).unwrap_err();
        assert_eq!(err.key(), "PLUGINS[1]");
        assert!(err.to_string().contains("found number"));
    }

    #[test]
    fn test_nested_mapping_error_path() {
        let doc = json!({
            "extension_configs": {
                "markdown.extensions.codehilite": {"css_class": "highlight", "weight": 0.5}
            }
        });
        let err = SettingValue::from_json("MARKDOWN", &doc).unwrap_err();
        assert_eq!(err.key(), "MARKDOWN.extension_configs.markdown.extensions.codehilite.weight");
    }

    #[test]
    fn test_empty_nested_mapping_is_valid() {
        let value =
            SettingValue::from_json("MARKDOWN", &json!({"markdown.extensions.meta": {}})).unwrap();
        let SettingValue::Mapping(map) = value else { panic!("expected mapping") };
        assert_eq!(map["markdown.extensions.meta"], SettingValue::Mapping(BTreeMap::new()));
    }

    #[test]
    fn test_toml_datetime_and_float_rejected() {
        let table: toml::Table = toml::from_str("when = 1979-05-27\nratio = 0.5\n").unwrap();
        let err = SettingValue::from_toml("when", &table["when"]).unwrap_err();
        assert!(err.to_string().contains("datetimes"));
        let err = SettingValue::from_toml("ratio", &table["ratio"]).unwrap_err();
        assert!(err.to_string().contains("found float"));
    }

    #[test]
    fn test_toml_array_of_integers_rejected() {
        let table: toml::Table = toml::from_str("PLUGINS = [1, 2]\n").unwrap();
        let err = SettingValue::from_toml("PLUGINS", &table["PLUGINS"]).unwrap_err();
        assert_eq!(err.key(), "PLUGINS[0]");
        assert!(err.to_string().contains("found integer"));
    }

    #[test]
    fn test_yaml_non_string_key_rejected() {
        let value: serde_yaml::Value = serde_yaml::from_str("1: one\n").unwrap();
        let err = SettingValue::from_yaml("EXTRA_PATH_METADATA", &value).unwrap_err();
        assert_eq!(err.key(), "EXTRA_PATH_METADATA");
        assert!(err.to_string().contains("mapping keys must be strings"));
    }

    #[test]
    fn test_yaml_null_is_valid() {
        let value: serde_yaml::Value = serde_yaml::from_str("~").unwrap();
        assert!(SettingValue::from_yaml("FEED_ALL_ATOM", &value).unwrap().is_null());
    }

    #[test]
    fn test_integer_above_i64_is_out_of_range() {
        let err = SettingValue::from_json("DEFAULT_PAGINATION", &json!(u64::MAX)).unwrap_err();
        assert_eq!(err.key(), "DEFAULT_PAGINATION");
        assert!(err.to_string().contains("integer out of range for a setting"));

        let value: serde_yaml::Value = serde_yaml::from_str("18446744073709551615").unwrap();
        let err = SettingValue::from_yaml("DEFAULT_PAGINATION", &value).unwrap_err();
        assert!(err.to_string().contains("integer out of range for a setting"));
    }

    #[test]
    fn test_yaml_float_is_not_reported_out_of_range() {
        let value: serde_yaml::Value = serde_yaml::from_str("2.5").unwrap();
        let err = SettingValue::from_yaml("DEFAULT_PAGINATION", &value).unwrap_err();
        assert!(err.to_string().contains("expected an integer, found number 2.5"));
    }

    #[test]
    fn test_yaml_tagged_value_rejected() {
        let value: serde_yaml::Value = serde_yaml::from_str("!Secret hunter2").unwrap();
        let err = SettingValue::from_yaml("SITEURL", &value).unwrap_err();
        assert_eq!(err.key(), "SITEURL");
        assert!(err.to_string().contains("tagged values are not supported"));

        let doc: serde_yaml::Value =
            serde_yaml::from_str("PLUGINS:\n  - assets\n  - !Plugin post_stats\n").unwrap();
        let err = SettingValue::from_yaml("", &doc).unwrap_err();
        assert_eq!(err.key(), "PLUGINS[1]");
        assert!(err.to_string().contains("tagged value"));
    }

    #[test]
    fn test_display_is_compact_json() {
        let value = SettingValue::from(vec!["assets", "post_stats"]);
        assert_eq!(value.to_string(), r#"["assets","post_stats"]"#);
        assert_eq!(SettingValue::Null.to_string(), "null");
    }

    #[test]
    fn test_deserialize_validates_shape() {
        let ok: SettingValue = serde_json::from_str(r#"{"path": "robots.txt"}"#).unwrap();
        assert_eq!(ok.kind(), "mapping");
        let bad: Result<SettingValue, _> = serde_json::from_str("[true]");
        assert!(bad.is_err());
    }
}
