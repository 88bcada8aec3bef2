//! The full experiment pipeline: plan, run, export, manifest.

use std::path::{Path, PathBuf};

use tenure_core::config::TenureConfig;
use tenure_core::experiment::{ExperimentPlan, RegimeOutcome, run_plan};
use tenure_report::{RegimeManifest, RunManifest, export_regime};
use tracing::info;

use crate::error::EngineError;

/// Run every configured regime and write all artifacts.
///
/// Returns the path of the run manifest.
pub fn run_experiment(config: &TenureConfig) -> Result<PathBuf, EngineError> {
    let plan = ExperimentPlan::from_config(config)?;
    let outcomes = run_plan(&plan)?;

    let output_dir = &config.experiment.output_dir;
    let mut manifest = RunManifest::new(&plan.name, plan.seed, config)?;
    for outcome in &outcomes {
        manifest.add_regime(export_outcome(config, outcome)?);
    }

    let path = manifest.write(output_dir)?;
    info!(
        run_id = %manifest.run_id,
        regimes = outcomes.len(),
        output_dir = %output_dir.display(),
        "Experiment complete"
    );
    Ok(path)
}

fn export_outcome(
    config: &TenureConfig,
    outcome: &RegimeOutcome,
) -> Result<RegimeManifest, EngineError> {
    let files = export_regime(
        &config.experiment.output_dir,
        outcome.index,
        &outcome.snapshots,
        &outcome.houses(),
    )?;

    Ok(RegimeManifest {
        index: outcome.index,
        price_multiplier: outcome.price_multiplier,
        total_steps: outcome.result.total_steps,
        audit_violations: outcome.result.audit_violations,
        final_summary: outcome.result.final_summary.clone(),
        files: files.paths().into_iter().map(Path::to_path_buf).collect(),
    })
}
