//! CLI configuration management.
//!
//! Handles loading of `waypoint.toml` with environment variable override
//! support. Precedence, lowest first: built-in defaults, the file,
//! `WAYPOINT_*` variables, command line flags.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use waypoint_core::math::DistanceMetric;
use waypoint_core::rng::WalkKind;
use waypoint_core::selection::{SearchStrategy, SelectorConfig};

/// Longest path the exhaustive strategy is allowed to search.
pub const MAX_EXHAUSTIVE_LENGTH: usize = 20;

/// Longest path the memoised strategy is allowed to search.
///
/// Its cache keys copy every sub-path, so memory grows with
/// `len² · budget`; the tabulated strategy has no such cost.
pub const MAX_MEMOIZED_LENGTH: usize = 200;

/// Longest path that may be generated.
pub const MAX_PATH_LENGTH: usize = 1_000_000;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )),
        }
    }
}

/// Longest path `strategy` may search from the CLI, if it is limited.
pub fn max_path_length(strategy: SearchStrategy) -> Option<usize> {
    match strategy {
        SearchStrategy::Exhaustive => Some(MAX_EXHAUSTIVE_LENGTH),
        SearchStrategy::Memoized => Some(MAX_MEMOIZED_LENGTH),
        SearchStrategy::Tabulated => None,
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaypointConfig {
    /// Number of points in a generated path
    pub path_length: usize,

    /// Maximum number of checkpoints
    pub budget: i64,

    /// Seed for generated paths
    pub seed: u64,

    /// Generator for paths not read from a file
    pub walk: WalkKind,

    /// Search strategy
    pub strategy: SearchStrategy,

    /// Segment distance metric
    pub metric: DistanceMetric,

    /// Entry limit for each memoisation cache
    pub cache_limit: Option<usize>,

    /// Output format
    pub output_format: OutputFormat,

    /// Log level
    pub log_level: String,
}

impl Default for WaypointConfig {
    fn default() -> Self {
        Self {
            path_length: 40,
            budget: 4,
            seed: 42,
            walk: WalkKind::default(),
            strategy: SearchStrategy::default(),
            metric: DistanceMetric::default(),
            cache_limit: None,
            output_format: OutputFormat::default(),
            log_level: "info".to_string(),
        }
    }
}

impl WaypointConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// Unparsable values leave the setting unchanged.
    pub fn with_env_override(mut self) -> Self {
        if let Some(path_length) = env_parse("WAYPOINT_PATH_LENGTH") {
            self.path_length = path_length;
        }

        if let Some(budget) = env_parse("WAYPOINT_BUDGET") {
            self.budget = budget;
        }

        if let Some(seed) = env_parse("WAYPOINT_SEED") {
            self.seed = seed;
        }

        if let Some(walk) = env_parse("WAYPOINT_WALK") {
            self.walk = walk;
        }

        if let Some(strategy) = env_parse("WAYPOINT_STRATEGY") {
            self.strategy = strategy;
        }

        if let Some(metric) = env_parse("WAYPOINT_METRIC") {
            self.metric = metric;
        }

        if let Ok(cache_limit) = std::env::var("WAYPOINT_CACHE_LIMIT") {
            self.cache_limit = cache_limit.parse().ok();
        }

        if let Some(output_format) = env_parse("WAYPOINT_OUTPUT_FORMAT") {
            self.output_format = output_format;
        }

        if let Ok(log_level) = std::env::var("WAYPOINT_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.budget < 0 {
            errors.push(format!("budget {} must be non-negative", self.budget));
        }

        if self.path_length > MAX_PATH_LENGTH {
            errors.push(format!(
                "path_length {} exceeds maximum allowed ({})",
                self.path_length, MAX_PATH_LENGTH
            ));
        }

        if self.cache_limit == Some(0) {
            errors.push("cache_limit must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Selector settings from this configuration
    pub fn selector_config(&self) -> SelectorConfig {
        let config = SelectorConfig::new(self.strategy, self.metric);
        match self.cache_limit {
            Some(limit) => config.with_cache_limit(limit),
            None => config,
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|value| value.parse().ok())
}

/// Configuration error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = WaypointConfig::default();
        assert_eq!(config.strategy, SearchStrategy::Memoized);
        assert_eq!(config.budget, 4);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(WaypointConfig::default().validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "budget = 7\nstrategy = \"tabulated\"\nmetric = \"squared-euclidean\"\nwalk = \"lattice\"\ncache_limit = 500"
        )
        .unwrap();

        let config = WaypointConfig::load(file.path()).unwrap();
        assert_eq!(config.budget, 7);
        assert_eq!(config.strategy, SearchStrategy::Tabulated);
        assert_eq!(config.metric, DistanceMetric::SquaredEuclidean);
        assert_eq!(config.walk, WalkKind::Lattice);
        assert_eq!(config.cache_limit, Some(500));
        // untouched fields keep their defaults
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "strategy = \"greedy\"").unwrap();
        assert!(matches!(
            WaypointConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = WaypointConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, WaypointConfig::default());
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("WAYPOINT_STRATEGY", "exhaustive");
        std::env::set_var("WAYPOINT_SEED", "not-a-number");
        let config = WaypointConfig::default().with_env_override();
        assert_eq!(config.strategy, SearchStrategy::Exhaustive);
        assert_eq!(config.seed, 42);
        std::env::remove_var("WAYPOINT_STRATEGY");
        std::env::remove_var("WAYPOINT_SEED");
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let config = WaypointConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert!(errors.iter().any(|e| e.contains("log_level")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_strategy_length_limits() {
        assert_eq!(
            max_path_length(SearchStrategy::Exhaustive),
            Some(MAX_EXHAUSTIVE_LENGTH)
        );
        assert_eq!(
            max_path_length(SearchStrategy::Memoized),
            Some(MAX_MEMOIZED_LENGTH)
        );
        assert_eq!(max_path_length(SearchStrategy::Tabulated), None);
    }

    #[test]
    fn test_long_walks_validate_for_any_strategy() {
        // Lengths are checked against the strategy once the path is loaded
        for strategy in SearchStrategy::ALL {
            let config = WaypointConfig {
                strategy,
                path_length: 8_000,
                budget: 8_000,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_validate_multiple_errors() {
        let config = WaypointConfig {
            log_level: "invalid".to_string(),
            budget: -1,
            cache_limit: Some(0),
            ..Default::default()
        };

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert_eq!(errors.len(), 3);
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_selector_config() {
        let config = WaypointConfig {
            cache_limit: Some(64),
            ..Default::default()
        };
        let selector = config.selector_config();
        assert_eq!(selector.strategy, SearchStrategy::Memoized);
        assert_eq!(selector.cache_limit, Some(64));
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        assert_eq!(error.to_string(), "Validation errors: Error 1; Error 2");
    }
}
