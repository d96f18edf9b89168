//! Typed errors for settings values

use thiserror::Error;

/// Path used when the offending value is the document itself.
pub const ROOT_PATH: &str = "<root>";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// A value has a shape the site generator settings cannot hold.
    ///
    /// `key` is the full path to the value: `MARKDOWN.output_format`,
    /// `STATIC_PATHS[2]`, or [`ROOT_PATH`] for the document itself.
    #[error("invalid configuration at `{key}`: {reason}")]
    InvalidConfiguration { key: String, reason: String },
}

impl SettingsError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        SettingsError::InvalidConfiguration { key: key.into(), reason: reason.into() }
    }

    /// Path of the value that failed validation.
    pub fn key(&self) -> &str {
        match self {
            SettingsError::InvalidConfiguration { key, .. } => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_key_and_reason() {
        let err = SettingsError::invalid("STATIC_PATHS[1]", "expected a string, found integer");
        assert_eq!(err.key(), "STATIC_PATHS[1]");
        assert_eq!(
            err.to_string(),
            "invalid configuration at `STATIC_PATHS[1]`: expected a string, found integer"
        );
    }
}
