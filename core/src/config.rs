use crate::errors::GenerateResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration struct for the promokit toolkit
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PromokitConfig {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub temperature: Option<f32>,
    pub log_level: Option<String>,
}

impl Default for PromokitConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model_name: Some("gemini-2.0-flash".to_string()),
            temperature: None,
            log_level: None,
        }
    }
}

impl PromokitConfig {
    /// Loads configuration from a file if it exists, otherwise returns the default config
    pub fn load_from_file(path: &Path) -> GenerateResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                crate::errors::GenerateError::ConfigError(format!(
                    "Failed to read config file: {}",
                    e
                ))
            })?;

            let config: Self = toml::from_str(&content).map_err(|e| {
                crate::errors::GenerateError::ConfigError(format!(
                    "Failed to parse config file: {}",
                    e
                ))
            })?;

            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to a file
    pub fn save_to_file(&self, path: &Path) -> GenerateResult<()> {
        let content = toml::to_string(self).map_err(|e| {
            crate::errors::GenerateError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        // Ensure the directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                crate::errors::GenerateError::ConfigError(format!(
                    "Failed to create config directory: {}",
                    e
                ))
            })?;
        }

        fs::write(path, content).map_err(|e| {
            crate::errors::GenerateError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Merges this config with another config, preferring values from the other config if present
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            api_key: other.api_key.clone().or_else(|| self.api_key.clone()),
            model_name: other.model_name.clone().or_else(|| self.model_name.clone()),
            temperature: other.temperature.or(self.temperature),
            log_level: other.log_level.clone().or_else(|| self.log_level.clone()),
        }
    }
}

/// Helper function to get default config directory
pub fn get_default_config_dir(app_name: &str) -> GenerateResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        crate::errors::GenerateError::ConfigError("Could not determine home directory".to_string())
    })?;

    let config_dir = home_dir.join(".config").join(app_name);

    Ok(config_dir)
}

/// Helper function to get default config file path
pub fn get_default_config_file(app_name: &str) -> GenerateResult<PathBuf> {
    let config_dir = get_default_config_dir(app_name)?;
    Ok(config_dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = PromokitConfig::load_from_file(&path).unwrap();
        assert_eq!(config.api_key, None);
        assert_eq!(config.model_name.as_deref(), Some("gemini-2.0-flash"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = PromokitConfig {
            api_key: Some("test-key".to_string()),
            model_name: Some("gemini-2.0-flash".to_string()),
            temperature: Some(0.7),
            log_level: Some("debug".to_string()),
        };
        config.save_to_file(&path).unwrap();

        let loaded = PromokitConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.api_key.as_deref(), Some("test-key"));
        assert_eq!(loaded.temperature, Some(0.7));
        assert_eq!(loaded.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_merge_prefers_other() {
        let base = PromokitConfig {
            api_key: Some("base-key".to_string()),
            model_name: Some("gemini-2.0-flash".to_string()),
            temperature: None,
            log_level: Some("info".to_string()),
        };
        let other = PromokitConfig {
            api_key: Some("override-key".to_string()),
            model_name: None,
            temperature: Some(0.2),
            log_level: None,
        };

        let merged = base.merge(&other);
        assert_eq!(merged.api_key.as_deref(), Some("override-key"));
        assert_eq!(merged.model_name.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(merged.temperature, Some(0.2));
        assert_eq!(merged.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_default_config_file_path() {
        let path = get_default_config_file("promokit").unwrap();
        assert!(path.ends_with(".config/promokit/config.toml"));
    }
}
