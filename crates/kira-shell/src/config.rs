//! Shell configuration loading from file and environment variables.

use serde::Deserialize;
use thiserror::Error;

/// Top-level shell configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Backend client settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Animation loop settings.
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the KIRA backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Seconds between periodic health checks.
    #[serde(default = "default_health_poll_seconds")]
    pub health_poll_seconds: u64,
}

/// Animation loop configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    /// Target frames per second for the avatar tick loop.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "kira_shell=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_health_poll_seconds() -> u64 {
    30
}

fn default_frame_rate() -> u32 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            health_poll_seconds: default_health_poll_seconds(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `KIRA_BACKEND_URL` overrides `backend.base_url`
/// - `KIRA_HEALTH_POLL_SECONDS` overrides `backend.health_poll_seconds`
/// - `KIRA_FRAME_RATE` overrides `animation.frame_rate`
/// - `KIRA_LOG_LEVEL` overrides `logging.level`
/// - `KIRA_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(url) = std::env::var("KIRA_BACKEND_URL") {
        config.backend.base_url = url;
    }
    if let Ok(seconds) = std::env::var("KIRA_HEALTH_POLL_SECONDS") {
        if let Ok(parsed) = seconds.parse() {
            config.backend.health_poll_seconds = parsed;
        }
    }
    if let Ok(rate) = std::env::var("KIRA_FRAME_RATE") {
        if let Ok(parsed) = rate.parse() {
            config.animation.frame_rate = parsed;
        }
    }
    if let Ok(level) = std::env::var("KIRA_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("KIRA_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_no_path_given() {
        let config = load_config(None).unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.backend.health_poll_seconds, 30);
        assert_eq!(config.animation.frame_rate, 60);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn defaults_when_file_missing() {
        let config = load_config(Some("/nonexistent/kira.toml")).unwrap();
        assert_eq!(config.animation.frame_rate, 60);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[backend]
base_url = "http://kira.internal:9000"

[animation]
frame_rate = 30

[logging]
level = "debug"
json = true
"#
        )
        .unwrap();

        let config = load_config(file.path().to_str()).unwrap();
        assert_eq!(config.backend.base_url, "http://kira.internal:9000");
        assert_eq!(config.backend.health_poll_seconds, 30); // default kept
        assert_eq!(config.animation.frame_rate, 30);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "this is not toml [").unwrap();
        assert!(matches!(
            load_config(file.path().to_str()),
            Err(ConfigError::Parse(_))
        ));
    }
}
