//! Configuration loading — TOML file with environment variable overrides.
//!
//! Reads `hueswitch.toml` from the working directory unless another path is
//! given. Every field has a default so the file is optional. Environment
//! variables take precedence over file values; CLI flags are applied on top
//! by `main`.

use std::path::Path;

use hueswitch_adapter_virtual::VirtualBridgeConfig;
use serde::Deserialize;

pub const DEFAULT_PATH: &str = "hueswitch.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which bridge to talk to, and as whom.
    pub bridge: BridgeSection,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Seed data for the bundled simulated bridge.
    pub virtual_bridge: VirtualBridgeConfig,
}

/// Bridge address and credentials.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BridgeSection {
    /// Bridge host. Empty means "locate the bridge".
    pub host: String,
    /// API username. Required for everything except `--register`.
    pub username: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hueswitch=info,hueswitch_app=info,hueswitch_adapter_virtual=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HUESWITCH_BRIDGE_HOST") {
            self.bridge.host = val;
        }
        if let Ok(val) = std::env::var("HUESWITCH_USERNAME") {
            self.bridge.username = val;
        }
        if let Ok(val) = std::env::var("HUESWITCH_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.virtual_bridge.host.is_empty() {
            return Err(ConfigError::Validation(
                "virtual_bridge.host must not be empty".to_string(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".to_string(),
            ));
        }
        Ok(())
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
