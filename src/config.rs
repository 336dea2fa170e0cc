//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::population::{TrendWindow, DEFAULT_NATION, POPULATION_ENDPOINT};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where population data comes from
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_nation")]
    pub nation: String,
}

fn default_url() -> String {
    POPULATION_ENDPOINT.to_string()
}

fn default_nation() -> String {
    DEFAULT_NATION.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            nation: default_nation(),
        }
    }
}

/// Preview output settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub trend_years: TrendWindow,

    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
}

fn default_chart_height() -> usize {
    12
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            trend_years: TrendWindow::default(),
            chart_height: default_chart_height(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
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

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
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
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("uspop").join("config.toml")),
            Some(PathBuf::from("./uspop.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        for rejected in self.apply_overrides(|key| std::env::var(key).ok()) {
            tracing::warn!("{}", rejected);
        }
    }

    /// Apply `USPOP_*` overrides read through `lookup`.
    ///
    /// Returns the overrides that were rejected; the previous value is kept
    /// for each of them.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<ConfigError> {
        let mut rejected = Vec::new();

        if let Some(url) = lookup("USPOP_API_URL") {
            self.source.url = url;
        }
        if let Some(nation) = lookup("USPOP_NATION") {
            self.source.nation = nation;
        }

        if let Some(years) = lookup("USPOP_TREND_YEARS") {
            match years.parse() {
                Ok(window) => self.display.trend_years = window,
                Err(e) => rejected.push(ConfigError::InvalidOverride {
                    var: "USPOP_TREND_YEARS",
                    error: e.to_string(),
                }),
            }
        }

        if let Some(level) = lookup("USPOP_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("USPOP_LOG_FORMAT") {
            self.logging.format = format;
        }

        rejected
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Ignoring {var}: {error}")]
    InvalidOverride { var: &'static str, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# US Population Trend Configuration
#
# Environment variables override these settings:
# - USPOP_API_URL
# - USPOP_NATION
# - USPOP_TREND_YEARS
# - USPOP_LOG_LEVEL
# - USPOP_LOG_FORMAT

[source]
# Tesseract endpoint returning {{ "data": [...] }} population records
url = "{url}"

# Nation kept by the filter (exact match)
nation = "{nation}"

[display]
# Trend window: 3, 5 or 10 years
trend_years = 3

# Rows of the text chart (at most 100)
chart_height = 12

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#,
        url = POPULATION_ENDPOINT,
        nation = DEFAULT_NATION,
    )
}
