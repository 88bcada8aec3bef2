//! Per-regime artifact bundle.
//!
//! For regime `k` (1-based) the following files are written:
//!
//! | File | Contents |
//! |------|----------|
//! | `summary_stats_{k}.csv` | [`summary_stats`] |
//! | `wlth_rpt{k}.csv` | [`wealth_report`] |
//! | `hs_data{k}.csv` | initial id, price and rent of every house |
//! | `pivot_table_{k}.xlsx` | [`pivot_counts`] of the summary |

use std::path::{Path, PathBuf};

use tenure_types::{AgentSnapshot, HouseRecord};
use tracing::info;

use crate::aggregate::{pivot_counts, summary_stats, wealth_report};
use crate::csv_export::write_table;
use crate::error::ReportError;
use crate::xlsx_export::write_pivot_table;

/// Paths of the files written for one regime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegimeFiles {
    /// Counts per step, agent type and ethnicity.
    pub summary_stats: PathBuf,
    /// Mean wealth and house count per step and agent type.
    pub wealth_report: PathBuf,
    /// Initial house data.
    pub house_data: PathBuf,
    /// Step-by-type pivot of the counts.
    pub pivot_table: PathBuf,
}

impl RegimeFiles {
    /// File paths for regime `index` inside `dir`.
    pub fn for_regime(dir: &Path, index: u32) -> Self {
        Self {
            summary_stats: dir.join(format!("summary_stats_{index}.csv")),
            wealth_report: dir.join(format!("wlth_rpt{index}.csv")),
            house_data: dir.join(format!("hs_data{index}.csv")),
            pivot_table: dir.join(format!("pivot_table_{index}.xlsx")),
        }
    }

    /// All four paths, in write order.
    pub fn paths(&self) -> [&Path; 4] {
        [
            self.summary_stats.as_path(),
            self.wealth_report.as_path(),
            self.house_data.as_path(),
            self.pivot_table.as_path(),
        ]
    }
}

/// Aggregate one regime's history and write its four artifacts into `dir`.
///
/// `dir` is created if it does not exist.
///
/// # Errors
///
/// Returns [`ReportError`] if the directory or any file cannot be written.
pub fn export_regime(
    dir: &Path,
    index: u32,
    snapshots: &[AgentSnapshot],
    houses: &[HouseRecord],
) -> Result<RegimeFiles, ReportError> {
    std::fs::create_dir_all(dir)?;
    let files = RegimeFiles::for_regime(dir, index);

    let summary = summary_stats(snapshots);
    write_table(&files.summary_stats, &summary)?;
    write_table(&files.wealth_report, &wealth_report(snapshots))?;
    write_table(&files.house_data, houses)?;
    write_pivot_table(&files.pivot_table, &pivot_counts(&summary))?;

    info!(
        regime = index,
        dir = %dir.display(),
        snapshots = snapshots.len(),
        houses = houses.len(),
        "Regime reports written"
    );
    Ok(files)
}
