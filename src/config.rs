//! Configuration loading for pixabay-search
//!
//! Configuration is loaded from:
//! 1. Environment variable PIXABAY_API_KEY (credential override)
//! 2. Environment variable PIXABAY_SEARCH_CONFIG_PATH
//! 3. ~/.pixabay-search/config.toml
//! 4. Default values

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Pixabay API configuration
    #[serde(default)]
    pub pixabay: PixabayConfig,
}

/// Pixabay API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PixabayConfig {
    /// API endpoint URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key (empty = not configured)
    #[serde(default)]
    pub key: String,
    /// Number of results requested per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

// Default value functions
fn default_base_url() -> String {
    "https://pixabay.com/api/".to_string()
}

fn default_per_page() -> u32 {
    36
}

fn default_timeout_seconds() -> u64 {
    15
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pixabay: PixabayConfig::default(),
        }
    }
}

impl Default for PixabayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            key: String::new(),
            per_page: default_per_page(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_path();

        let mut config = if let Some(path) = config_path {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                Self::load_path(&path)?
            } else {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
        } else {
            tracing::info!("No config path specified, using defaults");
            Self::default()
        };

        // API key from environment (highest priority)
        if let Ok(key) = std::env::var("PIXABAY_API_KEY") {
            config.pixabay.key = key;
        }

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("PIXABAY_SEARCH_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.pixabay-search/config.toml
        if let Ok(home) = std::env::var("HOME") {
            let path = PathBuf::from(home).join(".pixabay-search").join("config.toml");
            return Some(path);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.pixabay.base_url, "https://pixabay.com/api/");
        assert_eq!(config.pixabay.key, "");
        assert_eq!(config.pixabay.per_page, 36);
        assert_eq!(config.pixabay.timeout_seconds, 15);
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            [pixabay]
            key = "abc123"
            per_page = 20
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.pixabay.key, "abc123");
        assert_eq!(config.pixabay.per_page, 20);
        // Unspecified fields fall back to defaults
        assert_eq!(config.pixabay.base_url, "https://pixabay.com/api/");
        assert_eq!(config.pixabay.timeout_seconds, 15);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.pixabay.per_page, 36);
        assert!(config.pixabay.key.is_empty());
    }

    #[test]
    fn test_load_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pixabay]\nkey = \"from-file\"").unwrap();

        let config = Config::load_path(file.path()).unwrap();
        assert_eq!(config.pixabay.key, "from-file");
    }

    #[test]
    fn test_load_path_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[").unwrap();

        assert!(Config::load_path(file.path()).is_err());
    }
}
