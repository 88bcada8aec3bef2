//! Run manifest: one JSON document describing a whole experiment.
//!
//! The manifest records a unique run id, when it was generated, the full
//! configuration the run used, and for each regime its final step summary
//! and the files written for it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenure_types::StepSummary;
use tracing::info;
use uuid::Uuid;

use crate::error::ReportError;

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILE: &str = "run_manifest.json";

/// Summary of a whole experiment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    /// Unique, time-ordered run identifier.
    pub run_id: Uuid,
    /// When the manifest was created.
    pub generated_at: DateTime<Utc>,
    /// Experiment name.
    pub experiment: String,
    /// Seed of the shared RNG stream.
    pub seed: u64,
    /// The configuration the run used, as JSON.
    pub config: serde_json::Value,
    /// Per-regime results, in run order.
    pub regimes: Vec<RegimeManifest>,
}

/// One regime's entry in the [`RunManifest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeManifest {
    /// 1-based regime index.
    pub index: u32,
    /// Factor applied to the base mean price.
    pub price_multiplier: f64,
    /// Steps executed.
    pub total_steps: u64,
    /// Ownership audit violations logged during the run.
    pub audit_violations: u64,
    /// The last step summary, if any step ran.
    pub final_summary: Option<StepSummary>,
    /// Artifacts written for the regime.
    pub files: Vec<PathBuf>,
}

impl RunManifest {
    /// Start a manifest for an experiment, capturing `config` as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Json`] if `config` cannot be serialized.
    pub fn new<C: Serialize>(experiment: &str, seed: u64, config: &C) -> Result<Self, ReportError> {
        Ok(Self {
            run_id: Uuid::now_v7(),
            generated_at: Utc::now(),
            experiment: experiment.to_owned(),
            seed,
            config: serde_json::to_value(config)?,
            regimes: Vec::new(),
        })
    }

    /// Append a regime entry.
    pub fn add_regime(&mut self, regime: RegimeManifest) {
        self.regimes.push(regime);
    }

    /// Write the manifest as pretty-printed JSON to `dir/run_manifest.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if the file cannot be created, or
    /// [`ReportError::Json`] if serialization fails.
    pub fn write(&self, dir: &Path) -> Result<PathBuf, ReportError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(MANIFEST_FILE);
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!(
            run_id = %self.run_id,
            path = %path.display(),
            regimes = self.regimes.len(),
            "Run manifest written"
        );
        Ok(path)
    }
}
