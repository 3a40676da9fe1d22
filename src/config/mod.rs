use crate::convert::FrenchNumber;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

pub mod loader;

pub use loader::ConfigLoader;

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "french-numbers.toml";

/// Numbers converted by the `samples` command unless configured otherwise.
pub const DEFAULT_SAMPLES: [u32; 47] = [
    0, 1, 5, 10, 11, 15, 20, 21, 30, 35, 50, 51, 68, 70, 75, 99, 100, 101, 105, 111, 123, 168, 171,
    175, 199, 200, 201, 555, 999, 1000, 1001, 1111, 1199, 1234, 1999, 2000, 2001, 2020, 2021, 2345,
    9999, 10000, 11111, 12345, 123456, 654321, 999999,
];

/// Get the per-user directory holding `config.toml`
pub fn get_global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "french-numbers").map(|dirs| dirs.config_dir().to_path_buf())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub samples: Vec<u32>,
    pub compare: CompareConfig,
    /// Environment overrides that could not be parsed, kept until logging is up
    #[serde(skip)]
    pub ignored_env: Vec<IgnoredEnvVar>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredEnvVar {
    pub key: String,
    pub value: String,
}

/// Settings for the strategy timing comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Number of random batches to time
    pub rounds: usize,
    /// Numbers per batch
    pub batch_size: usize,
    /// Fixed RNG seed; a fresh one is drawn per run when absent
    pub seed: Option<u64>,
    /// CSV file receiving per-round timings
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            samples: DEFAULT_SAMPLES.to_vec(),
            compare: CompareConfig::default(),
            ignored_env: Vec::new(),
        }
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            rounds: 100,
            batch_size: 48,
            seed: None,
            output: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_env_with(|key| std::env::var(key).ok());
    }

    /// Apply `FRENCH_NUMBERS_*` overrides read through `lookup`.
    pub fn merge_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup("FRENCH_NUMBERS_LOG_LEVEL") {
            self.log_level = Some(log_level);
        }

        let ignored = &mut self.ignored_env;

        if let Some(rounds) = parse_env(&lookup, "FRENCH_NUMBERS_ROUNDS", ignored) {
            self.compare.rounds = rounds;
        }

        if let Some(batch_size) = parse_env(&lookup, "FRENCH_NUMBERS_BATCH_SIZE", ignored) {
            self.compare.batch_size = batch_size;
        }

        if let Some(seed) = parse_env(&lookup, "FRENCH_NUMBERS_SEED", ignored) {
            self.compare.seed = Some(seed);
        }
    }

    /// Warn about every environment override that was dropped while merging.
    pub fn log_ignored_env(&self) {
        for var in &self.ignored_env {
            warn!("Ignoring {}: cannot parse {:?}", var.key, var.value);
        }
    }

    /// Check the settings every command relies on. Compare settings are
    /// checked separately once command-line flags have been applied.
    pub fn validate(&self) -> Result<()> {
        self.sample_numbers()?;
        Ok(())
    }

    /// The configured samples, each checked against the supported range.
    pub fn sample_numbers(&self) -> Result<Vec<FrenchNumber>> {
        self.samples
            .iter()
            .map(|&n| FrenchNumber::new(n).map_err(Error::from))
            .collect()
    }

    pub fn get_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}

impl CompareConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(Error::Config("compare.rounds must be at least 1".to_string()));
        }
        if self.batch_size == 0 {
            return Err(Error::Config(
                "compare.batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_env<F, T>(lookup: &F, key: &str, ignored: &mut Vec<IgnoredEnvVar>) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            ignored.push(IgnoredEnvVar {
                key: key.to_string(),
                value: raw,
            });
            None
        }
    }
}
