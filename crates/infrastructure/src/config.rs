//! Application configuration
//!
//! Layered with the `config` crate: serde defaults, then an optional
//! `holiday-checker.{toml,json,yaml}` in the working directory, then an
//! explicit file, then `HOLIDAY_CHECKER_*` environment variables
//! (e.g. `HOLIDAY_CHECKER_HOLIDAYS__TIMEOUT_SECS=10`).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use integration_holidays::HolidayConfig;
use serde::{Deserialize, Serialize};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}. Use 'text' or 'json'")),
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable log lines
    #[default]
    Text,
    /// One JSON object per log line
    Json,
}

/// Report output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default report format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log line format
    #[serde(default)]
    pub format: LogFormat,
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Holiday API settings
    #[serde(default)]
    pub holidays: HolidayConfig,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

const ENV_PREFIX: &str = "HOLIDAY_CHECKER";
const DEFAULT_FILE_NAME: &str = "holiday-checker";

impl AppConfig {
    /// Load configuration from defaults, optional files and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(
        path: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            // Load from file in the working directory if it exists
            .add_source(config::File::with_name(DEFAULT_FILE_NAME).required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder.add_source(env).build()?;
        config.try_deserialize()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if any section is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.holidays
            .validate()
            .map_err(|e| format!("holidays: {e}"))
    }
}
