//! Subcommands and the sweep options they share.

pub mod compare;
pub mod list;
pub mod preview;
pub mod run;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use sortbench_config::RunConfig;
use sortbench_core::AlgorithmKind;

/// Sweep parameters, layered over an optional config file.
///
/// Flags override values read from `--config`; anything left unset keeps
/// the file's value, or the built-in default without a file.
#[derive(Args, Debug, Default, Clone)]
pub struct SweepArgs {
    /// TOML or YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Inclusive lower bound of generated values
    #[arg(long)]
    pub lower_bound: Option<i64>,

    /// Exclusive upper bound of generated values
    #[arg(long)]
    pub upper_bound: Option<i64>,

    /// Benchmark sizes 1..MAX_SIZE
    #[arg(short = 'n', long)]
    pub max_size: Option<usize>,

    /// Trials per size
    #[arg(short, long)]
    pub repetitions: Option<usize>,

    /// Seed for reproducible inputs
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl SweepArgs {
    /// Builds and validates the configuration.
    pub fn resolve(&self, algorithm: Option<AlgorithmKind>) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RunConfig::new(),
        };

        if let Some(lower) = self.lower_bound {
            config.lower_bound = lower;
        }
        if let Some(upper) = self.upper_bound {
            config.upper_bound = upper;
        }
        if let Some(max_size) = self.max_size {
            config.max_size = max_size;
        }
        if let Some(repetitions) = self.repetitions {
            config.repetitions = repetitions;
        }
        if let Some(seed) = self.seed {
            config.random_seed = Some(seed);
        }
        if let Some(algorithm) = algorithm {
            config.algorithm = algorithm;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<RunConfig> {
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    let config = if is_yaml {
        RunConfig::from_yaml_file(path)
    } else {
        RunConfig::load(path)
    };
    config.with_context(|| format!("failed to load {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_flags() {
        let config = SweepArgs::default().resolve(None).unwrap();
        assert_eq!(config, RunConfig::new());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = SweepArgs {
            max_size: Some(12),
            seed: Some(3),
            ..Default::default()
        };
        let config = args.resolve(Some(AlgorithmKind::Quick)).unwrap();
        assert_eq!(config.max_size, 12);
        assert_eq!(config.random_seed, Some(3));
        assert_eq!(config.algorithm, AlgorithmKind::Quick);
        assert_eq!(config.repetitions, 20);
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.yaml");
        fs::write(&path, "max_size: 30\nrepetitions: 2\nalgorithm: bubble-sort\n").unwrap();

        let args = SweepArgs {
            config: Some(path),
            repetitions: Some(7),
            ..Default::default()
        };
        let config = args.resolve(None).unwrap();
        assert_eq!(config.max_size, 30);
        assert_eq!(config.repetitions, 7);
        assert_eq!(config.algorithm, AlgorithmKind::Bubble);
    }

    #[test]
    fn test_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.toml");
        fs::write(&path, "lower_bound = 5\nupper_bound = 9\n").unwrap();

        let args = SweepArgs {
            config: Some(path),
            ..Default::default()
        };
        let config = args.resolve(None).unwrap();
        assert_eq!((config.lower_bound, config.upper_bound), (5, 9));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let args = SweepArgs {
            lower_bound: Some(50),
            upper_bound: Some(10),
            ..Default::default()
        };
        let err = args.resolve(None).unwrap_err();
        assert!(format!("{:#}", err).contains("lower bound must be less than upper bound"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let args = SweepArgs {
            config: Some(PathBuf::from("/nonexistent/bench.toml")),
            ..Default::default()
        };
        let err = args.resolve(None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bench.toml"));
    }
}
