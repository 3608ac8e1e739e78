//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `smarthub.toml` in the working directory, or the path in
//! `SMARTHUB_CONFIG`. Every field has a default so the file is optional.
//! Environment variables take precedence over file values.

use serde::Deserialize;

const DEFAULT_PATH: &str = "smarthub.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Console behaviour.
    pub console: ConsoleConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Console configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Echo the operator prompts before reading each line.
    pub prompts: bool,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is malformed,
    /// or if an override has an invalid value.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("SMARTHUB_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("SMARTHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("SMARTHUB_PROMPTS") {
            self.console.prompts = parse_flag(&val)?;
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Validation(format!(
            "SMARTHUB_PROMPTS must be a boolean, got {value:?}"
        ))),
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smarthub=warn,smarthub_app=warn".to_string(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { prompts: true }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
