//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::ApiConfig as ServerConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("heart.csv")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl From<&ApiConfig> for ServerConfig {
    fn from(config: &ApiConfig) -> Self {
        ServerConfig::new(config.host.clone(), config.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Called before logging is initialized, so problems are returned as
    /// warnings for the caller to log.
    pub fn load_default() -> (Self, Vec<String>) {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("heartview").join("config.toml")),
            Some(PathBuf::from("./heartview.toml")),
        ];

        let mut warnings = Vec::new();

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => return (config, warnings),
                    Err(e) => warnings.push(e.to_string()),
                }
            }
        }

        (Self::from_env(), warnings)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a key lookup (environment in production)
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("HEARTVIEW_DATA_PATH") {
            self.data.path = PathBuf::from(path);
        }

        if let Some(host) = lookup("HEARTVIEW_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("HEARTVIEW_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        if let Some(level) = lookup("HEARTVIEW_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("HEARTVIEW_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Heartview Configuration
#
# Environment variables override these settings:
# - HEARTVIEW_DATA_PATH
# - HEARTVIEW_HOST
# - HEARTVIEW_PORT
# - HEARTVIEW_LOG_LEVEL
# - HEARTVIEW_LOG_FORMAT

[data]
# CSV export of the heart-disease dataset
path = "heart.csv"

[api]
# Dashboard host
host = "127.0.0.1"

# Dashboard port
port = 8050

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data.path, PathBuf::from("heart.csv"));
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.api.port, 8050);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 8050);
        assert_eq!(config.data.path, PathBuf::from("heart.csv"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[api]\nport = 9000\n").unwrap();
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("HEARTVIEW_DATA_PATH", "/data/heart.csv"),
            ("HEARTVIEW_PORT", "9100"),
            ("HEARTVIEW_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.data.path, PathBuf::from("/data/heart.csv"));
        assert_eq!(config.api.port, 9100);
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "HEARTVIEW_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.api.port, 8050);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[data]\npath = \"sample.csv\"\n").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.data.path, PathBuf::from("sample.csv"));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[api]\nport = \"eighty\"\n").unwrap();

        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_server_config_conversion() {
        let config = Config::default();
        let server: ServerConfig = (&config.api).into();
        assert_eq!(server.addr(), "127.0.0.1:8050");
    }

    #[test]
    fn test_server_config_keeps_overrides() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "HEARTVIEW_HOST" => Some("0.0.0.0".to_string()),
            "HEARTVIEW_PORT" => Some("9100".to_string()),
            _ => None,
        });

        let server: ServerConfig = (&config.api).into();
        let state = crate::api::AppState::new(
            std::sync::Arc::new(crate::dataset::Dataset::from_records(Vec::new())),
            server.clone(),
        );

        assert_eq!(server.addr(), "0.0.0.0:9100");
        assert_eq!(state.config.addr(), server.addr());
    }
}
