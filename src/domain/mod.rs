//! Core data types: setting values, configurations and their errors

pub mod configuration;
pub mod error;
pub mod value;

pub use configuration::Configuration;
pub use error::SettingsError;
pub use value::SettingValue;
