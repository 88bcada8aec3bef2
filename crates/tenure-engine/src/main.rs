//! Experiment driver binary for the Tenure housing-market simulation.
//!
//! Runs one housing market per configured price regime, each for a fixed
//! number of steps, then aggregates the recorded snapshots and writes the
//! per-regime CSV and XLSX reports plus a JSON run manifest.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `tenure-config.yaml` (or `TENURE_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Expand the configuration into a regime plan
//! 4. Run every regime from one seeded RNG stream
//! 5. Export reports and the run manifest

mod error;
mod pipeline;

use std::path::PathBuf;

use tenure_core::config::TenureConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Environment variable naming the configuration file.
const CONFIG_PATH_ENV: &str = "TENURE_CONFIG";

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "tenure-config.yaml";

/// Application entry point for the experiment driver.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a regime fails, or a
/// report cannot be written.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging is not up yet, so remember what happened.
    let (config, source) = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("tenure-engine starting");
    match source {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!("Config file not found, using defaults"),
    }
    info!(
        experiment = config.experiment.name,
        seed = config.experiment.seed,
        steps = config.experiment.steps,
        regimes = config.regimes.price_multipliers.len(),
        households = config.population.agent_count,
        houses = config.housing.house_count,
        output_dir = %config.experiment.output_dir.display(),
        "Experiment configured"
    );

    // 3-5. Plan, run and export.
    let manifest_path = pipeline::run_experiment(&config)?;

    info!(
        manifest = %manifest_path.display(),
        "tenure-engine shutdown complete"
    );
    Ok(())
}

/// Load the experiment configuration.
///
/// Reads the file named by `TENURE_CONFIG`, or `tenure-config.yaml` in the
/// working directory. A missing file yields the defaults; the path actually
/// loaded is returned alongside the config.
fn load_config() -> Result<(TenureConfig, Option<PathBuf>), EngineError> {
    let config_path = std::env::var(CONFIG_PATH_ENV)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    if config_path.exists() {
        let config = TenureConfig::from_file(&config_path)?;
        Ok((config, Some(config_path)))
    } else {
        let mut config = TenureConfig::default();
        config.experiment.apply_env_overrides();
        Ok((config, None))
    }
}
