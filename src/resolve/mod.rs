//! Settings resolution
//!
//! A publish configuration is derived from a base configuration by replacing
//! whole keys. Nested mappings are never merged: an override of `MARKDOWN`
//! replaces the entire `MARKDOWN` value.

use crate::domain::{Configuration, SettingsError};
use tracing::{debug, Level};

pub mod changes;

pub use changes::{changes, Change};

/// Produce the effective configuration from `base` and an optional override.
///
/// Neither input is touched; the result is a fresh value holding the union of
/// keys, with override values winning on collision.
pub fn resolve(base: &Configuration, overrides: Option<&Configuration>) -> Configuration {
    let Some(overrides) = overrides else {
        debug!(settings = base.len(), "No override, using base configuration");
        return base.clone();
    };

    if tracing::enabled!(Level::DEBUG) {
        for change in changes(base, overrides) {
            let action = match &change {
                Change::Added { .. } => "adds setting",
                Change::Replaced { .. } => "replaces value",
                Change::Unchanged { .. } => "keeps value",
            };
            debug!(key = change.key(), action, "Override applied");
        }
    }

    // Later entries win when collected into the sorted map.
    base.iter()
        .chain(overrides.iter())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Validate two raw documents and resolve them.
///
/// Fails with [`SettingsError::InvalidConfiguration`] when either document
/// holds a value shape a setting cannot take, or is not a mapping.
pub fn resolve_documents(
    base: &serde_json::Value,
    overrides: Option<&serde_json::Value>,
) -> Result<Configuration, SettingsError> {
    let base = Configuration::from_json(base)?;
    let overrides = overrides.map(Configuration::from_json).transpose()?;
    Ok(resolve(&base, overrides.as_ref()))
}

/// A base configuration waiting for its (optional) override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsResolver {
    base: Configuration,
}

impl SettingsResolver {
    pub fn new(base: Configuration) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Configuration {
        &self.base
    }

    pub fn resolve_with(&self, overrides: Option<&Configuration>) -> Configuration {
        resolve(&self.base, overrides)
    }

    pub fn apply(&self, overrides: &Configuration) -> Configuration {
        resolve(&self.base, Some(overrides))
    }

    /// What `overrides` would change when applied to the base.
    pub fn changes(&self, overrides: &Configuration) -> Vec<Change> {
        changes(&self.base, overrides)
    }
}
