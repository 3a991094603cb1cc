//! Configuration file parsing for the air quality service.
//!
//! Settings come from a TOML file, with a handful of environment overrides
//! for deployment. A `.env` file in the working directory is loaded first,
//! so overrides can live there too.
//!
//! Environment variables:
//! - `AIRMON_CONFIG`      : path of the TOML file to load
//! - `AIRMON_BIND_ADDRESS`: overrides `bind_address`
//! - `AIRMON_PORT`        : overrides `bind_port`

use crate::aqi::Locale;
use crate::logging::LogLevel;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const ENV_CONFIG_PATH: &str = "AIRMON_CONFIG";
pub const ENV_BIND_ADDRESS: &str = "AIRMON_BIND_ADDRESS";
pub const ENV_PORT: &str = "AIRMON_PORT";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is present but unusable
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

/// Service configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (default: 3000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Artificial latency added to neighborhood responses, in milliseconds
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,

    /// Days of history generated per neighborhood
    #[serde(default = "default_measurement_days")]
    pub measurement_days: u32,

    /// Fixed seed for the mock dataset; random when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Language for labels and descriptions served by `/api/levels`
    #[serde(default)]
    pub locale: Locale,

    #[serde(default)]
    pub log: LogConfig,
}

/// `[log]` table
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,

    /// Append log lines to this file in addition to the console
    #[serde(default)]
    pub file: Option<String>,

    #[serde(default = "default_console_timestamps")]
    pub console_timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            file: None,
            console_timestamps: default_console_timestamps(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    3000
}

/// The dashboard simulated 300 ms of network latency.
fn default_response_delay_ms() -> u64 {
    300
}

fn default_measurement_days() -> u32 {
    7
}

fn default_console_timestamps() -> bool {
    true
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            response_delay_ms: default_response_delay_ms(),
            measurement_days: default_measurement_days(),
            seed: None,
            locale: Locale::default(),
            log: LogConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ServiceConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads `.env`, then the file named by `AIRMON_CONFIG` (or defaults),
    /// then applies the bind overrides.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let config = match std::env::var(ENV_CONFIG_PATH) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        config.with_overrides(
            std::env::var(ENV_BIND_ADDRESS).ok(),
            std::env::var(ENV_PORT).ok(),
        )
    }

    /// Applies bind overrides taken from the environment.
    pub fn with_overrides(
        mut self,
        bind_address: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(address) = bind_address.filter(|a| !a.is_empty()) {
            self.bind_address = address;
        }
        if let Some(port) = port.filter(|p| !p.is_empty()) {
            self.bind_port = port.parse().map_err(|_| ConfigError::Invalid {
                field: ENV_PORT.to_string(),
                reason: format!("'{}' is not a valid port", port),
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.measurement_days == 0 {
            return Err(ConfigError::Invalid {
                field: "measurement_days".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.bind_address.is_empty() {
            return Err(ConfigError::Invalid {
                field: "bind_address".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Create a configuration for tests: no delay, fixed seed
    pub fn default_test_config() -> Self {
        Self {
            bind_port: 0,
            response_delay_ms: 0,
            seed: Some(42),
            ..Self::default()
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.response_delay(), Duration::from_millis(300));
        assert_eq!(config.measurement_days, 7);
        assert_eq!(config.locale, Locale::PtBr);
        assert_eq!(config.log.level, LogLevel::Info);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = ServiceConfig::from_toml_str("").unwrap();
        assert_eq!(config.bind_port, 3000);
        assert!(config.log.console_timestamps);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            response_delay_ms = 0
            measurement_days = 14
            seed = 7
            locale = "en"

            [log]
            level = "debug"
            file = "airmon.log"
            console_timestamps = false
        "#;

        let config = ServiceConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.response_delay_ms, 0);
        assert_eq!(config.measurement_days, 14);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.file.as_deref(), Some("airmon.log"));
        assert!(!config.log.console_timestamps);
    }

    #[test]
    fn test_zero_measurement_days_rejected() {
        let err = ServiceConfig::from_toml_str("measurement_days = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "measurement_days"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            ServiceConfig::from_toml_str("bind_port = \"eighty\""),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::default()
            .with_overrides(Some("0.0.0.0".to_string()), Some("8081".to_string()))
            .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8081");

        let unchanged = ServiceConfig::default().with_overrides(Some(String::new()), None).unwrap();
        assert_eq!(unchanged.bind_address, "127.0.0.1");

        assert!(ServiceConfig::default()
            .with_overrides(None, Some("not-a-port".to_string()))
            .is_err());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        assert!(matches!(
            ServiceConfig::from_file("/nonexistent/airmon.toml"),
            Err(ConfigError::FileRead(_))
        ));
    }
}
