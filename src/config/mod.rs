//! Configuration management for Journal

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Backend host used when neither config nor flags provide one
pub const DEFAULT_API_HOST: &str = "http://localhost:3000";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL (scheme + host + port)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Bearer token returned by sign-in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Items requested per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Client-side request budget
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
}

fn default_page_size() -> usize {
    10
}

fn default_requests_per_second() -> u32 {
    10
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            page_size: default_page_size(),
            requests_per_second: default_requests_per_second(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".journal").join("config.yaml"))
    }

    /// Resolve an optional override into a concrete path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path, falling back to defaults
    /// when the file does not exist yet.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match Self::load_from(&Self::resolve_path(path)?) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        if config.preferences.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".to_string()).into());
        }

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // Token lives here, keep it private to the user
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Backend host, with the `--api-host` override taking precedence
    pub fn api_host(&self, host_override: Option<&str>) -> String {
        host_override
            .map(str::to_string)
            .or_else(|| self.api_host.clone())
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_host.is_none());
        assert!(config.access_token.is_none());
        assert_eq!(config.preferences.page_size, 10);
        assert_eq!(config.preferences.requests_per_second, 10);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let config = Config::load_at(path.to_str()).unwrap();
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = Config {
            api_host: Some("http://backend:3000".to_string()),
            access_token: Some("tok".to_string()),
            preferences: Preferences {
                page_size: 25,
                ..Preferences::default()
            },
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_host.as_deref(), Some("http://backend:3000"));
        assert_eq!(loaded.access_token.as_deref(), Some("tok"));
        assert_eq!(loaded.preferences.page_size, 25);
    }

    #[test]
    fn test_partial_preferences_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "preferences:\n  format: json\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.preferences.format.as_deref(), Some("json"));
        assert_eq!(loaded.preferences.page_size, 10);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "preferences:\n  page_size: 0\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_api_host_precedence() {
        let mut config = Config::default();
        assert_eq!(config.api_host(None), DEFAULT_API_HOST);

        config.api_host = Some("http://from-file".to_string());
        assert_eq!(config.api_host(None), "http://from-file");
        assert_eq!(config.api_host(Some("http://flag")), "http://flag");
    }
}
