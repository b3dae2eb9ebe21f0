//! Configuration for the catalog viewer
//!
//! Read from `<config dir>/catalog-viewer/config.toml` when present:
//!
//! ```toml
//! [data]
//! dir = "/srv/catalog"     # users.json, categories.json, products.json
//!
//! [logging]
//! filter = "catalog_core=debug"
//! file = "/tmp/catalog.log"
//!
//! [display]
//! show_icons = true
//! ```
//!
//! Every section and field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{ConfigError, Result};
use crate::table::TableOptions;

const APP_DIR: &str = "catalog-viewer";
const CONFIG_FILE: &str = "config.toml";

/// Viewer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Where the datasets come from
    pub data: DataConfig,
    /// Log filter and destination
    pub logging: LoggingConfig,
    /// Table rendering
    pub display: DisplayConfig,
}

/// Dataset source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory with the three JSON datasets; built-in fixtures when unset
    pub dir: Option<PathBuf>,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub filter: String,
    /// Log file; stderr when unset
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            file: None,
        }
    }
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Prefix category titles with their icon glyph
    pub show_icons: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { show_icons: true }
    }
}

impl CatalogConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> std::result::Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> std::result::Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> std::result::Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "logging.filter must not be empty".to_string(),
            ));
        }

        if let Some(dir) = &self.data.dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(
                    "data.dir must not be an empty path".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Read, parse and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the default config file, falling back to defaults when it does
    /// not exist
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// The dataset this configuration points at
    pub fn dataset(&self) -> Result<Dataset> {
        match &self.data.dir {
            Some(dir) => Dataset::load_dir(dir),
            None => Dataset::builtin(),
        }
    }

    /// Table rendering options
    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            show_icons: self.display.show_icons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.logging.filter, "warn");
        assert!(config.display.show_icons);
        assert!(config.data.dir.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config = CatalogConfig::from_toml("[display]\nshow_icons = false\n").unwrap();
        assert!(!config.display.show_icons);
        assert_eq!(config.logging, LoggingConfig::default());
        assert!(!config.table_options().show_icons);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = CatalogConfig::default();
        config.data.dir = Some(PathBuf::from("/srv/catalog"));
        config.logging.filter = "catalog_core=debug".to_string();

        let toml = config.to_toml().unwrap();
        assert_eq!(CatalogConfig::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn test_json_serialization() {
        let config = CatalogConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(CatalogConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_empty_filter_is_invalid() {
        let mut config = CatalogConfig::default();
        config.logging.filter = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            CatalogConfig::from_toml("[display\nshow_icons = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nfilter = \"debug\"\n").unwrap();

        let config = CatalogConfig::load(&path).unwrap();
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Config(ConfigError::Read(_))));
    }

    #[test]
    fn test_builtin_dataset_by_default() {
        let dataset = CatalogConfig::default().dataset().unwrap();
        assert_eq!(dataset, Dataset::builtin().unwrap());
    }
}
