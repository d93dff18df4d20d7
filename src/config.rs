//! Centralized configuration management for movietui

use std::path::PathBuf;
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the log file (TUI output must not go to the terminal)
    pub log_path: PathBuf,
}

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("log directory does not exist: {0}")]
    LogDirMissing(PathBuf),
    #[error("log path has no file name: {0}")]
    LogPathInvalid(PathBuf),
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Self {
        let log_path = std::env::var("MOVIETUI_LOG_PATH")
            .unwrap_or_else(|_| "./movietui.log".to_string())
            .into();

        Config { log_path }
    }

    /// Directory component of the log path, used by the file appender.
    pub fn log_dir(&self) -> PathBuf {
        self.log_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// File-name component of the log path.
    pub fn log_file_name(&self) -> Result<String, ConfigError> {
        self.log_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(String::from)
            .ok_or_else(|| ConfigError::LogPathInvalid(self.log_path.clone()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dir = self.log_dir();
        if !dir.exists() {
            return Err(ConfigError::LogDirMissing(dir));
        }
        self.log_file_name()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_env();
        assert_eq!(config.log_path, PathBuf::from("./movietui.log"));
        assert_eq!(config.log_dir(), PathBuf::from("."));
        assert_eq!(config.log_file_name().unwrap(), "movietui.log");
    }

    #[test]
    fn test_config_validation() {
        let config = Config::from_env();
        // Should not fail for default paths
        config.validate().unwrap();
    }

    #[test]
    fn test_validation_rejects_missing_dir() {
        let config = Config {
            log_path: PathBuf::from("/no/such/dir/movietui.log"),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::LogDirMissing(_))
        ));
    }
}
