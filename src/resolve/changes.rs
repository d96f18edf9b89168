//! Per-key report of what an override does to a base configuration

use crate::domain::{Configuration, SettingValue};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum Change {
    /// Key absent from the base.
    Added { key: String, value: SettingValue },
    /// Key present in the base with a different value.
    Replaced { key: String, from: SettingValue, to: SettingValue },
    /// Key overridden with the value it already had.
    Unchanged { key: String },
}

impl Change {
    pub fn key(&self) -> &str {
        match self {
            Change::Added { key, .. } | Change::Replaced { key, .. } | Change::Unchanged { key } => {
                key
            }
        }
    }
}

/// List every key of `overrides` and how it affects `base`, sorted by key.
pub fn changes(base: &Configuration, overrides: &Configuration) -> Vec<Change> {
    overrides
        .iter()
        .map(|(key, value)| match base.get(key) {
            None => Change::Added { key: key.clone(), value: value.clone() },
            Some(previous) if previous == value => Change::Unchanged { key: key.clone() },
            Some(previous) => {
                Change::Replaced { key: key.clone(), from: previous.clone(), to: value.clone() }
            }
        })
        .collect()
}
