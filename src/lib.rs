//! siteconf: resolve static-site generator settings
//!
//! Loads a base settings file, applies an optional publish override by
//! key-wise replacement, and renders the effective configuration for the
//! site generator.

pub mod cli;
pub mod config;
pub mod domain;
pub mod render;
pub mod resolve;

pub use domain::{Configuration, SettingValue, SettingsError};
pub use resolve::{resolve, resolve_documents, SettingsResolver};
