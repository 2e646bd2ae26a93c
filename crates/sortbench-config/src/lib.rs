//! Configuration system for sortbench.
//!
//! Load a benchmark run configuration from TOML or YAML so sweeps can be
//! repeated without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use sortbench_config::RunConfig;
//! use sortbench_core::AlgorithmKind;
//!
//! let config = RunConfig::from_toml_str(r#"
//!     lower_bound = 1
//!     upper_bound = 1000
//!     max_size = 10
//!     repetitions = 5
//!     algorithm = "selection-sort"
//! "#).unwrap();
//!
//! assert_eq!(config.algorithm, AlgorithmKind::Selection);
//! assert_eq!(config.sweep_len(), 9);
//! config.validate().unwrap();
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use sortbench_config::RunConfig;
//!
//! let config = RunConfig::load("sortbench.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use sortbench_core::{AlgorithmKind, SortBenchError};
use thiserror::Error;

/// Smallest accepted value for either bound.
pub const MIN_BOUND: i64 = 1;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for SortBenchError {
    fn from(err: ConfigError) -> Self {
        SortBenchError::Config(err.to_string())
    }
}

/// Parameters of one benchmarking request.
///
/// Built fresh per request and never changed while a sweep runs. Parsing
/// does not check the values; call [`RunConfig::validate`] before running.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct RunConfig {
    /// Inclusive lower bound of generated values.
    pub lower_bound: i64,

    /// Exclusive upper bound of generated values.
    pub upper_bound: i64,

    /// Sizes `1..max_size` are benchmarked; `max_size` itself is not.
    pub max_size: usize,

    /// Trials per size.
    pub repetitions: usize,

    /// Strategy to benchmark.
    pub algorithm: AlgorithmKind,

    /// Random seed for reproducible sweeps.
    pub random_seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            lower_bound: 20,
            upper_bound: 10_000,
            max_size: 50,
            repetitions: 20,
            algorithm: AlgorithmKind::default(),
            random_seed: None,
        }
    }
}

impl RunConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Sets both value bounds.
    pub fn with_bounds(mut self, lower_bound: i64, upper_bound: i64) -> Self {
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        self
    }

    /// Sets the exclusive maximum size of the sweep.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets the number of trials per size.
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Sets the strategy.
    pub fn with_algorithm(mut self, algorithm: AlgorithmKind) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Number of size points in the sweep (`max_size - 1`, or zero).
    pub fn sweep_len(&self) -> usize {
        self.max_size.saturating_sub(1)
    }

    /// Checks the configuration before a run.
    ///
    /// Bounds must be at least [`MIN_BOUND`] with `lower_bound < upper_bound`;
    /// `max_size` and `repetitions` must be at least one.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortbench_config::RunConfig;
    ///
    /// let err = RunConfig::new().with_bounds(500, 500).validate().unwrap_err();
    /// assert!(err.to_string().contains("lower bound must be less than upper bound"));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lower_bound < MIN_BOUND || self.upper_bound < MIN_BOUND {
            return Err(ConfigError::Invalid(format!(
                "bounds must be at least {}, got [{}, {})",
                MIN_BOUND, self.lower_bound, self.upper_bound
            )));
        }
        if self.lower_bound >= self.upper_bound {
            return Err(ConfigError::Invalid(format!(
                "lower bound must be less than upper bound, got [{}, {})",
                self.lower_bound, self.upper_bound
            )));
        }
        if self.max_size < 1 {
            return Err(ConfigError::Invalid("max_size must be at least 1".to_string()));
        }
        if self.repetitions < 1 {
            return Err(ConfigError::Invalid(
                "repetitions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
