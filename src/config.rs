//! Configuration module for storefront
//!
//! Settings are layered: built-in defaults, then the user's config file
//! (`<config_dir>/storefront/config.toml`), then `STOREFRONT_*`
//! environment variables. Command-line flags are applied last by the caller
//! through [`StorefrontConfig::with_overrides`].

use crate::catalog::HttpCatalogSource;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name used under the platform config and data directories
const APP_DIR: &str = "storefront";

fn default_endpoint() -> String {
    HttpCatalogSource::DEFAULT_ENDPOINT.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Base URL of the catalog service
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Where to write the log; defaults to the platform data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            log_file: None,
            quiet: false,
        }
    }
}

impl StorefrontConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join(APP_DIR).join("config.toml"))
    }

    /// Default log location, `<data_local_dir>/storefront/storefront.log`
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join("storefront.log"))
    }

    /// Effective log file: the configured one, else the default location
    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(Self::default_log_path)
    }

    /// Load configuration from the user's config file and environment
    ///
    /// A missing config file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file or environment contain invalid values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file (if present) and environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or a value has the
    /// wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("endpoint", default_endpoint())?
            .set_default("quiet", false)?
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("STOREFRONT").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = %path.display(), endpoint = %config.endpoint, "configuration loaded");
        Ok(config)
    }

    /// Save configuration to the user's config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be
    /// written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Apply command-line flags on top of the loaded values
    #[must_use]
    pub fn with_overrides(mut self, endpoint: Option<String>, quiet: bool) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self.quiet |= quiet;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = StorefrontConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.endpoint, "https://fakestoreapi.com");
        assert!(!config.quiet);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = StorefrontConfig {
            endpoint: "http://localhost:8080".to_string(),
            log_file: Some(dir.path().join("store.log")),
            quiet: true,
        };

        config.save_to(&path).unwrap();
        assert_eq!(StorefrontConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = true\n").unwrap();

        let config = StorefrontConfig::load_from(&path).unwrap();
        assert!(config.quiet);
        assert_eq!(config.endpoint, HttpCatalogSource::DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = \"sometimes\"\n").unwrap();

        assert!(StorefrontConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::default()
            .with_overrides(Some("http://127.0.0.1:9000".to_string()), true);
        assert_eq!(config.endpoint, "http://127.0.0.1:9000");
        assert!(config.quiet);

        let config = StorefrontConfig::default().with_overrides(None, false);
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_log_path_prefers_configured() {
        let config = StorefrontConfig {
            log_file: Some(PathBuf::from("/tmp/shop.log")),
            ..StorefrontConfig::default()
        };
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/shop.log")));
    }
}
