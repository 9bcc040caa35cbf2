//! Error types for configuration loading, option merging and preset application.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("invalid value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid options for '{preset}': {message}")]
    InvalidOptions { preset: String, message: String },

    // Schema validation errors (no filesystem checks)
    #[error("invalid rule pattern '{pattern}': {message}")]
    InvalidRuleTest { pattern: String, message: String },

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Entry scanning
    #[error("invalid entry pattern '{pattern}': {message}")]
    EntryPattern { pattern: String, message: String },

    #[error("failed to scan {}: {message}", path.display())]
    EntryScan { path: PathBuf, message: String },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_includes_hint() {
        let err = ConfigError::InvalidValue {
            field: "externals".to_string(),
            hint: Some("expected a mapping or a list".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for 'externals': expected a mapping or a list"
        );
    }

    #[test]
    fn invalid_value_without_hint() {
        let err = ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: None,
        };
        assert_eq!(err.to_string(), "invalid value for 'config'");
    }
}
