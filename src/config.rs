//! Run configuration.
//!
//! Values are resolved in three layers, later layers winning:
//!
//! 1. Built-in defaults ([`RunConfig::default`], [`GenerateConfig::default`])
//! 2. Environment overrides ([`RunConfig::apply_env`])
//! 3. Command-line flags (applied by the binary)
//!
//! | Variable | Field | Example |
//! |----------|-------|---------|
//! | `SKILLMATCH_DATASETS_DIR` | `datasets_dir` | `./datasets` |
//! | `SKILLMATCH_DATASET` | `dataset` | `challenge` |
//! | `SKILLMATCH_MATCHER` | `strategy` | `indexed_join` |
//! | `SKILLMATCH_WRITER` | `format` | `table` |
//! | `SKILLMATCH_SEED` | `seed` (generate only) | `42` |

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::engine::{MatchError, Strategy};
use crate::io::{OutputFormat, UnknownFormatError, DEMANDS_FILE, SUPPLIES_FILE};

pub const ENV_DATASETS_DIR: &str = "SKILLMATCH_DATASETS_DIR";
pub const ENV_DATASET: &str = "SKILLMATCH_DATASET";
pub const ENV_MATCHER: &str = "SKILLMATCH_MATCHER";
pub const ENV_WRITER: &str = "SKILLMATCH_WRITER";
pub const ENV_SEED: &str = "SKILLMATCH_SEED";

/// Invalid configuration value
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Strategy {
        var: &'static str,
        #[source]
        source: MatchError,
    },

    #[error("{var}: {source}")]
    Format {
        var: &'static str,
        #[source]
        source: UnknownFormatError,
    },

    #[error("{var}: expected an unsigned integer, found {value:?}")]
    NotANumber { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Location of one dataset on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub demands: PathBuf,
    pub supplies: PathBuf,
}

fn dataset_paths(datasets_dir: &Path, dataset: &str) -> DatasetPaths {
    let root = datasets_dir.join(dataset);
    DatasetPaths {
        demands: root.join(DEMANDS_FILE),
        supplies: root.join(SUPPLIES_FILE),
    }
}

/// Options for a matching run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory holding one sub-directory per dataset
    pub datasets_dir: PathBuf,

    /// Dataset name (sub-directory of `datasets_dir`)
    pub dataset: String,

    /// Matching strategy
    pub strategy: Strategy,

    /// Output format
    pub format: OutputFormat,

    /// Treat the first row of each input file as a header
    pub skip_header: bool,

    /// Print a match receipt to stderr after the run
    pub receipt: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            datasets_dir: PathBuf::from("datasets"),
            dataset: "challenge".to_string(),
            strategy: Strategy::default(),
            format: OutputFormat::default(),
            skip_header: true,
            receipt: false,
        }
    }
}

impl RunConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup.
    ///
    /// The lookup is a parameter so tests never touch the process
    /// environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATASETS_DIR) {
            self.datasets_dir = non_empty(ENV_DATASETS_DIR, dir)?.into();
        }
        if let Some(dataset) = lookup(ENV_DATASET) {
            self.dataset = non_empty(ENV_DATASET, dataset)?;
        }
        if let Some(name) = lookup(ENV_MATCHER) {
            self.strategy = name.parse().map_err(|source| ConfigError::Strategy {
                var: ENV_MATCHER,
                source,
            })?;
        }
        if let Some(name) = lookup(ENV_WRITER) {
            self.format = name.parse().map_err(|source| ConfigError::Format {
                var: ENV_WRITER,
                source,
            })?;
        }
        Ok(())
    }

    /// Paths of the demand and supply files
    pub fn paths(&self) -> DatasetPaths {
        dataset_paths(&self.datasets_dir, &self.dataset)
    }
}

/// Options for synthetic dataset generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Directory holding one sub-directory per dataset
    pub datasets_dir: PathBuf,

    /// Dataset to (re)write
    pub dataset: String,

    /// Number of demand records
    pub demands: usize,

    /// Number of supply records
    pub supplies: usize,

    /// RNG seed
    pub seed: u64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            datasets_dir: PathBuf::from("datasets"),
            dataset: "generated".to_string(),
            demands: 1000,
            supplies: 1000,
            seed: 42,
        }
    }
}

impl GenerateConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATASETS_DIR) {
            self.datasets_dir = non_empty(ENV_DATASETS_DIR, dir)?.into();
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = parse_number(ENV_SEED, &seed)?;
        }
        Ok(())
    }

    /// Paths of the demand and supply files to write
    pub fn paths(&self) -> DatasetPaths {
        dataset_paths(&self.datasets_dir, &self.dataset)
    }
}

fn non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    if value.is_empty() {
        Err(ConfigError::Empty { var })
    } else {
        Ok(value)
    }
}

/// Parse an unsigned integer, naming `var` in the error
pub fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::NotANumber {
        var,
        value: value.to_string(),
    })
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_run_defaults() {
        let config = RunConfig::default();

        assert_eq!(config.dataset, "challenge");
        assert_eq!(config.strategy, Strategy::DirectScan);
        assert_eq!(config.format, OutputFormat::Csv);
        assert!(config.skip_header);
        assert_eq!(
            config.paths(),
            DatasetPaths {
                demands: PathBuf::from("datasets/challenge/demands.csv"),
                supplies: PathBuf::from("datasets/challenge/supplies.csv"),
            }
        );
    }

    #[test]
    fn test_run_env_overrides() {
        let mut config = RunConfig::default();
        config
            .apply_env(env(&[
                (ENV_DATASETS_DIR, "/data"),
                (ENV_DATASET, "big"),
                (ENV_MATCHER, "preemptive"),
                (ENV_WRITER, "table"),
            ]))
            .unwrap();

        assert_eq!(config.strategy, Strategy::IndexedJoin);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.paths().demands, PathBuf::from("/data/big/demands.csv"));
    }

    #[test]
    fn test_run_env_bad_matcher() {
        let mut config = RunConfig::default();
        let err = config.apply_env(env(&[(ENV_MATCHER, "fuzzy")])).unwrap_err();

        assert!(matches!(err, ConfigError::Strategy { .. }));
        assert!(err.to_string().starts_with("SKILLMATCH_MATCHER: unknown matching strategy"));
    }

    #[test]
    fn test_run_env_empty_dataset() {
        let mut config = RunConfig::default();
        let err = config.apply_env(env(&[(ENV_DATASET, "")])).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { var: ENV_DATASET }));
    }

    #[test]
    fn test_generate_defaults_and_seed() {
        let mut config = GenerateConfig::default();
        assert_eq!(config.demands, 1000);
        assert_eq!(config.supplies, 1000);
        assert_eq!(config.seed, 42);

        config.apply_env(env(&[(ENV_SEED, "7")])).unwrap();
        assert_eq!(config.seed, 7);

        let err = config.apply_env(env(&[(ENV_SEED, "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::NotANumber { .. }));
    }
}
