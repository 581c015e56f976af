//! Error types for site configuration loading.

use thiserror::Error;

/// Error raised while loading or validating a site configuration.
///
/// Every variant is fatal: a configuration either loads completely or not at all.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required field is missing, blank, or has the wrong type or format
    #[error("Configuration shape error: {0}")]
    Shape(String),

    /// A markdown extension identifier is not in the recognized set
    #[error("Unknown markdown extension: '{identifier}'")]
    UnknownExtension { identifier: String },

    /// A navigation or sidebar target is empty or does not start with '/'
    #[error("Invalid path '{path}' for entry '{label}': must be non-empty and start with '/'")]
    InvalidPath { label: String, path: String },

    /// I/O error while reading a declaration from disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Build a shape error from anything displayable.
    pub fn shape(message: impl Into<String>) -> Self {
        ConfigError::Shape(message.into())
    }

    /// Build a path error for the entry labelled `label`.
    pub fn invalid_path(label: &str, path: &str) -> Self {
        ConfigError::InvalidPath {
            label: label.to_string(),
            path: path.to_string(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Shape(err.to_string().trim_end().to_string())
    }
}
