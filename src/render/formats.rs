//! Serialization of an effective configuration for the site generator

use crate::domain::{Configuration, SettingValue};
use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
    Yaml,
}

pub fn render(config: &Configuration, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(config),
        OutputFormat::Toml => render_toml(config),
        OutputFormat::Yaml => {
            serde_yaml::to_string(config).context("Failed to serialize settings as YAML")
        }
    }
}

fn render_json(config: &Configuration) -> Result<String> {
    let text =
        serde_json::to_string_pretty(config).context("Failed to serialize settings as JSON")?;
    Ok(format!("{}\n", text))
}

/// TOML has no null, so null settings (at any depth) are dropped with a warning.
fn render_toml(config: &Configuration) -> Result<String> {
    let table: toml::Table = config
        .iter()
        .filter_map(|(key, value)| to_toml_value(key, value).map(|v| (key.clone(), v)))
        .collect();
    toml::to_string(&table).context("Failed to serialize settings as TOML")
}

fn to_toml_value(path: &str, value: &SettingValue) -> Option<toml::Value> {
    let converted = match value {
        SettingValue::Null => {
            warn!("Dropping `{}` from TOML output: TOML cannot represent null", path);
            return None;
        }
        SettingValue::Bool(b) => toml::Value::Boolean(*b),
        SettingValue::Integer(n) => toml::Value::Integer(*n),
        SettingValue::String(s) => toml::Value::String(s.clone()),
        SettingValue::Sequence(items) => {
            toml::Value::Array(items.iter().cloned().map(toml::Value::String).collect())
        }
        SettingValue::Mapping(map) => toml::Value::Table(
            map.iter()
                .filter_map(|(key, inner)| {
                    to_toml_value(&format!("{path}.{key}"), inner).map(|v| (key.clone(), v))
                })
                .collect(),
        ),
    };
    Some(converted)
}

/// Text for a single value: strings are printed bare, everything else as
/// compact JSON.
pub fn render_value(value: &SettingValue) -> String {
    match value {
        SettingValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
