//! Configuration loading and typed config structures for Tenure experiments.
//!
//! The configuration lives in `tenure-config.yaml` in the working directory.
//! Every field has a default, and the defaults reproduce the reference
//! experiment: 200 households, 200 houses, 30 steps, and five price regimes
//! with mean price `k * 1,000,000` for `k = 1..=5`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tenure_agents::PopulationParams;
use tenure_stock::HousingParams;

/// Environment variable that overrides `experiment.output_dir`.
pub const OUTPUT_DIR_ENV: &str = "TENURE_OUTPUT_DIR";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level experiment configuration.
///
/// Mirrors the structure of `tenure-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TenureConfig {
    /// Run-level settings (name, seed, step count, output location).
    #[serde(default)]
    pub experiment: ExperimentConfig,

    /// Household population distributions.
    #[serde(default)]
    pub population: PopulationConfig,

    /// Housing stock distributions, before the regime multiplier.
    #[serde(default)]
    pub housing: HousingConfig,

    /// The price regimes to run.
    #[serde(default)]
    pub regimes: RegimesConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TenureConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `TENURE_OUTPUT_DIR`, when set, overrides `experiment.output_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.experiment.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.experiment.apply_env_overrides();
        Ok(config)
    }
}

/// Run-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Human-readable experiment name.
    #[serde(default = "default_experiment_name")]
    pub name: String,

    /// Seed for the single RNG stream shared by all regimes.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Steps to run in each regime.
    #[serde(default = "default_steps")]
    pub steps: u64,

    /// Directory the per-regime artifacts are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Abort a regime on the first ownership audit violation.
    #[serde(default)]
    pub strict_audit: bool,
}

impl ExperimentConfig {
    /// Override the output directory from the environment when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(OUTPUT_DIR_ENV) {
            self.output_dir = PathBuf::from(val);
        }
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            name: default_experiment_name(),
            seed: default_seed(),
            steps: default_steps(),
            output_dir: default_output_dir(),
            strict_audit: false,
        }
    }
}

/// Household population distributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Number of households.
    #[serde(default = "default_agent_count")]
    pub agent_count: u32,

    /// Mean per-step income.
    #[serde(default = "default_income_mean")]
    pub income_mean: f64,

    /// Standard deviation of per-step income.
    #[serde(default = "default_income_std")]
    pub income_std: f64,

    /// Mean initial wealth.
    #[serde(default = "default_wealth_mean")]
    pub wealth_mean: f64,

    /// Standard deviation of initial wealth.
    #[serde(default = "default_wealth_std")]
    pub wealth_std: f64,
}

impl PopulationConfig {
    /// Sampling parameters for the household population.
    pub const fn params(&self) -> PopulationParams {
        PopulationParams {
            agent_count: self.agent_count,
            income_mean: self.income_mean,
            income_std: self.income_std,
            wealth_mean: self.wealth_mean,
            wealth_std: self.wealth_std,
        }
    }
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            agent_count: default_agent_count(),
            income_mean: default_income_mean(),
            income_std: default_income_std(),
            wealth_mean: default_wealth_mean(),
            wealth_std: default_wealth_std(),
        }
    }
}

/// Housing stock distributions.
///
/// `price_mean` is the base price; each regime multiplies it by its own
/// price multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousingConfig {
    /// Number of houses created per regime.
    #[serde(default = "default_house_count")]
    pub house_count: u32,

    /// Base mean price.
    #[serde(default = "default_price_mean")]
    pub price_mean: f64,

    /// Standard deviation of price.
    #[serde(default = "default_price_std")]
    pub price_std: f64,

    /// Mean rent.
    #[serde(default = "default_rent_mean")]
    pub rent_mean: f64,

    /// Standard deviation of rent.
    #[serde(default = "default_rent_std")]
    pub rent_std: f64,
}

impl HousingConfig {
    /// Sampling parameters for a regime with the given price multiplier.
    pub const fn params(&self, price_multiplier: f64) -> HousingParams {
        HousingParams {
            house_count: self.house_count,
            price_mean: self.price_mean * price_multiplier,
            price_std: self.price_std,
            rent_mean: self.rent_mean,
            rent_std: self.rent_std,
        }
    }
}

impl Default for HousingConfig {
    fn default() -> Self {
        Self {
            house_count: default_house_count(),
            price_mean: default_price_mean(),
            price_std: default_price_std(),
            rent_mean: default_rent_mean(),
            rent_std: default_rent_std(),
        }
    }
}

/// The set of price regimes to run, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimesConfig {
    /// One regime per entry; each scales `housing.price_mean`.
    #[serde(default = "default_price_multipliers")]
    pub price_multipliers: Vec<f64>,
}

impl Default for RegimesConfig {
    fn default() -> Self {
        Self {
            price_multipliers: default_price_multipliers(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes
    /// precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_experiment_name() -> String {
    "Price regimes".to_owned()
}

const fn default_seed() -> u64 {
    0
}

const fn default_steps() -> u64 {
    30
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

const fn default_agent_count() -> u32 {
    200
}

const fn default_income_mean() -> f64 {
    20_000.0
}

const fn default_income_std() -> f64 {
    2_050.0
}

const fn default_wealth_mean() -> f64 {
    1_000_000.0
}

const fn default_wealth_std() -> f64 {
    500_000.0
}

const fn default_house_count() -> u32 {
    200
}

const fn default_price_mean() -> f64 {
    1_000_000.0
}

const fn default_price_std() -> f64 {
    250.0
}

const fn default_rent_mean() -> f64 {
    1_000.0
}

const fn default_rent_std() -> f64 {
    250.0
}

fn default_price_multipliers() -> Vec<f64> {
    vec![1.0, 2.0, 3.0, 4.0, 5.0]
}

fn default_log_level() -> String {
    "info".to_owned()
}
