//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Tracker tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Number of entries on the global leaderboard
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,

    /// Length of the best-streak window, in games
    #[serde(default = "default_streak_window")]
    pub streak_window: usize,

    /// Minimum prefix length before name search returns anything
    #[serde(default = "default_search_min_chars")]
    pub search_min_chars: usize,

    /// Page size for paginated match history
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Cap on the warm-profiles listing
    #[serde(default = "default_built_profiles_limit")]
    pub built_profiles_limit: usize,
}

fn default_leaderboard_size() -> usize {
    100
}

fn default_streak_window() -> usize {
    10
}

fn default_search_min_chars() -> usize {
    2
}

fn default_page_size() -> usize {
    10
}

fn default_built_profiles_limit() -> usize {
    8
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            leaderboard_size: default_leaderboard_size(),
            streak_window: default_streak_window(),
            search_min_chars: default_search_min_chars(),
            page_size: default_page_size(),
            built_profiles_limit: default_built_profiles_limit(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TrackerConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.leaderboard_size == 0 {
            return Err(ConfigError::ValidationError(
                "leaderboard size must be greater than 0".to_string(),
            ));
        }

        if self.streak_window == 0 {
            return Err(ConfigError::ValidationError(
                "streak window must be greater than 0".to_string(),
            ));
        }

        if self.page_size == 0 {
            return Err(ConfigError::ValidationError(
                "page size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();

        assert_eq!(config.leaderboard_size, 100);
        assert_eq!(config.streak_window, 10);
        assert_eq!(config.search_min_chars, 2);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.built_profiles_limit, 8);
    }

    #[test]
    fn test_config_validation_ok() {
        let config = TrackerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_leaderboard_size() {
        let mut config = TrackerConfig::default();
        config.leaderboard_size = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_streak_window() {
        let mut config = TrackerConfig::default();
        config.streak_window = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "leaderboard_size = 50\nstreak_window = 5").unwrap();

        let config = TrackerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.leaderboard_size, 50);
        assert_eq!(config.streak_window, 5);
        // Unspecified fields fall back to defaults
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_config_from_file_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 0").unwrap();

        assert!(TrackerConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = TrackerConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        let parsed: TrackerConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.leaderboard_size, parsed.leaderboard_size);
    }
}
