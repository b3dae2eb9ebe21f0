//! Error types for catalog-core
//!
//! Only loading is fallible. Joining, filtering, sorting and rendering are
//! total functions over in-memory data and never produce an error.

use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A dataset file could not be read
    #[error("IO error: {0}")]
    Io(String),

    /// A dataset document is not valid JSON for its record shape
    #[error("Failed to parse {dataset} dataset: {message}")]
    Parse { dataset: String, message: String },

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("Failed to read config: {0}")]
    Read(String),

    /// The config document is malformed
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A value is present but not usable
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
