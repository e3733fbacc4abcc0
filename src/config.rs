//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub publication: PublicationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Timing and synthesis settings for the publication pipeline
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PublicationConfig {
    /// Simulated moderation latency before the entry is created
    #[serde(default = "default_review_delay")]
    pub review_delay_ms: u64,

    /// Delay between creation and display
    #[serde(default = "default_reveal_delay")]
    pub reveal_delay_ms: u64,

    /// How long the "new" marker stays on a displayed entry
    #[serde(default = "default_new_marker")]
    pub new_marker_ms: u64,

    #[serde(default = "default_min_plays")]
    pub min_plays: u64,

    #[serde(default = "default_max_plays")]
    pub max_plays: u64,
}

fn default_review_delay() -> u64 {
    3000
}

fn default_reveal_delay() -> u64 {
    500
}

fn default_new_marker() -> u64 {
    5000
}

fn default_min_plays() -> u64 {
    100
}

fn default_max_plays() -> u64 {
    999
}

impl Default for PublicationConfig {
    fn default() -> Self {
        Self {
            review_delay_ms: default_review_delay(),
            reveal_delay_ms: default_reveal_delay(),
            new_marker_ms: default_new_marker(),
            min_plays: default_min_plays(),
            max_plays: default_max_plays(),
        }
    }
}

impl PublicationConfig {
    pub fn review_delay(&self) -> Duration {
        Duration::from_millis(self.review_delay_ms)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn new_marker(&self) -> Duration {
        Duration::from_millis(self.new_marker_ms)
    }

    /// Play count range for synthesized entries, never starting below 1
    pub fn play_range(&self) -> RangeInclusive<u64> {
        let min = self.min_plays.max(1);
        min..=self.max_plays.max(min)
    }

    /// Time from submission until the entry is visible
    pub fn time_to_display(&self) -> Duration {
        self.review_delay() + self.reveal_delay()
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

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
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
            dirs::config_dir().map(|p| p.join("rockchart").join("config.toml")),
            Some(PathBuf::from("/etc/rockchart/config.toml")),
            Some(PathBuf::from("./config.toml")),
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

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let millis = |key: &str| lookup(key).and_then(|v| v.parse::<u64>().ok());

        if let Some(ms) = millis("ROCKCHART_REVIEW_DELAY_MS") {
            self.publication.review_delay_ms = ms;
        }
        if let Some(ms) = millis("ROCKCHART_REVEAL_DELAY_MS") {
            self.publication.reveal_delay_ms = ms;
        }
        if let Some(ms) = millis("ROCKCHART_NEW_MARKER_MS") {
            self.publication.new_marker_ms = ms;
        }

        if let Some(level) = lookup("ROCKCHART_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ROCKCHART_LOG_FORMAT") {
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
    r#"# Rockchart Configuration
#
# Environment variables override these settings:
# - ROCKCHART_REVIEW_DELAY_MS
# - ROCKCHART_REVEAL_DELAY_MS
# - ROCKCHART_NEW_MARKER_MS
# - ROCKCHART_LOG_LEVEL
# - ROCKCHART_LOG_FORMAT

[publication]
# Simulated moderation delay before a submission becomes a chart entry (ms)
review_delay_ms = 3000

# Delay between entry creation and display (ms)
reveal_delay_ms = 500

# How long new entries carry the NEW badge (ms)
new_marker_ms = 5000

# Play count range for new entries
min_plays = 100
max_plays = 999

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
