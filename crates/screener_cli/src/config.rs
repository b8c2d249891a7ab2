//! Screener configuration management.
//!
//! Handles loading configuration from a TOML file with environment variable
//! overrides and validation.

use screener_core::cache::DEFAULT_CACHE_CAPACITY;
use screener_core::eps::{
    HeatmapOptions, DEFAULT_FLAT_THRESHOLD, DEFAULT_SCALE_FLOOR, DEFAULT_WATCH_LIMIT,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "Unknown format: {}. Supported: table, csv, json",
                other
            )),
        }
    }
}

/// Screener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScreenerConfig {
    /// Log level when `RUST_LOG` is unset
    pub log_level: String,

    /// Floor of the heatmap colour scale, in percent
    pub scale_floor: f64,

    /// Band around zero shown as flat in timelines, in percent
    pub flat_threshold: f64,

    /// Length of the quick-watch list
    pub watch_limit: usize,

    /// Option chain cache size
    pub cache_capacity: usize,

    /// Default output format
    pub format: OutputFormat,

    /// Tickers already on the watchlist
    pub watched: Vec<String>,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            scale_floor: DEFAULT_SCALE_FLOOR,
            flat_threshold: DEFAULT_FLAT_THRESHOLD,
            watch_limit: DEFAULT_WATCH_LIMIT,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            format: OutputFormat::default(),
            watched: Vec::new(),
        }
    }
}

impl ScreenerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("SCREENER_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(floor) = lookup("SCREENER_SCALE_FLOOR").and_then(|v| v.parse().ok()) {
            self.scale_floor = floor;
        }

        if let Some(threshold) = lookup("SCREENER_FLAT_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.flat_threshold = threshold;
        }

        if let Some(limit) = lookup("SCREENER_WATCH_LIMIT").and_then(|v| v.parse().ok()) {
            self.watch_limit = limit;
        }

        if let Some(format) = lookup("SCREENER_FORMAT").and_then(|v| v.parse().ok()) {
            self.format = format;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if let Err(e) = self.heatmap_options() {
            errors.push(e.to_string());
        }

        if !self.flat_threshold.is_finite() || self.flat_threshold < 0.0 {
            errors.push(format!(
                "flat_threshold must be a non-negative number, got {}",
                self.flat_threshold
            ));
        }

        if self.cache_capacity == 0 {
            errors.push("cache_capacity must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Heatmap options derived from this configuration
    pub fn heatmap_options(&self) -> screener_core::Result<HeatmapOptions> {
        HeatmapOptions::new(self.scale_floor)
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_validates() {
        let config = ScreenerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scale_floor, 5.0);
        assert_eq!(config.watch_limit, 8);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = ScreenerConfig::parse(
            r#"
            scale_floor = 10.0
            format = "csv"
            watched = ["AAPL", "MSFT"]
            "#,
        )
        .unwrap();
        assert_eq!(config.scale_floor, 10.0);
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.watched, vec!["AAPL", "MSFT"]);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_error() {
        let err = ScreenerConfig::parse("scale_floor = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "watch_limit = 3").unwrap();
        let config = ScreenerConfig::load(file.path()).unwrap();
        assert_eq!(config.watch_limit, 3);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScreenerConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_overrides() {
        let config = ScreenerConfig::default().with_overrides(lookup(&[
            ("SCREENER_LOG_LEVEL", "debug"),
            ("SCREENER_SCALE_FLOOR", "12.5"),
            ("SCREENER_FORMAT", "json"),
            ("SCREENER_WATCH_LIMIT", "not-a-number"),
        ]));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.scale_floor, 12.5);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.watch_limit, DEFAULT_WATCH_LIMIT);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = ScreenerConfig {
            log_level: "loud".to_string(),
            scale_floor: 0.0,
            flat_threshold: -1.0,
            cache_capacity: 0,
            ..ScreenerConfig::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 4);
                assert!(errors.iter().any(|e| e.contains("log_level")));
                assert!(errors.iter().any(|e| e.contains("scale_floor")));
                assert!(errors.iter().any(|e| e.contains("flat_threshold")));
                assert!(errors.iter().any(|e| e.contains("cache_capacity")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
