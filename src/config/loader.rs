//! Settings file loading

use crate::domain::Configuration;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Top-level table that, when present, holds the settings of a larger file.
pub const SECTION: &str = "siteconf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Ok(FileFormat::Toml),
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            "json" => Ok(FileFormat::Json),
            other => bail!(
                "Unsupported settings extension '.{}' for file {}",
                other,
                path.display()
            ),
        }
    }
}

/// Load one settings file; the format is picked from the extension.
pub fn load_settings(path: &Path) -> Result<Configuration> {
    let format = FileFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading settings file: {}", path.display()))?;

    let config = parse_settings(&content, format)
        .with_context(|| format!("Invalid settings file: {}", path.display()))?;

    debug!(path = %path.display(), settings = config.len(), "Loaded settings file");
    Ok(config)
}

pub fn parse_settings(content: &str, format: FileFormat) -> Result<Configuration> {
    match format {
        FileFormat::Toml => parse_toml_settings(content),
        FileFormat::Yaml => parse_yaml_settings(content),
        FileFormat::Json => parse_json_settings(content),
    }
}

/// Parse TOML settings, reading only the `[siteconf]` table when there is one.
fn parse_toml_settings(content: &str) -> Result<Configuration> {
    let raw: toml::Table = toml::from_str(content).context("Invalid TOML syntax")?;

    let config = match raw.get(SECTION) {
        Some(toml::Value::Table(nested)) => Configuration::from_toml(nested)?,
        Some(_) => bail!("`{}` must be a table", SECTION),
        None => Configuration::from_toml(&raw)?,
    };
    Ok(config)
}

fn parse_yaml_settings(content: &str) -> Result<Configuration> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content).context("Invalid YAML syntax")?;

    let config = match raw.get(SECTION) {
        Some(nested @ serde_yaml::Value::Mapping(_)) => Configuration::from_yaml(nested)?,
        Some(_) => bail!("`{}` must be a table", SECTION),
        None => Configuration::from_yaml(&raw)?,
    };
    Ok(config)
}

fn parse_json_settings(content: &str) -> Result<Configuration> {
    let raw: serde_json::Value = serde_json::from_str(content).context("Invalid JSON syntax")?;

    let config = match raw.get(SECTION) {
        Some(nested @ serde_json::Value::Object(_)) => Configuration::from_json(nested)?,
        Some(_) => bail!("`{}` must be a table", SECTION),
        None => Configuration::from_json(&raw)?,
    };
    Ok(config)
}
