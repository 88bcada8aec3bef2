//! Aggregation and export of Tenure experiment results.
//!
//! Takes the snapshot history and house data of each regime, groups it into
//! the summary, wealth and pivot tables, and writes them as CSV and XLSX
//! files. A JSON [`RunManifest`] ties a whole experiment's outputs together.
//!
//! # Modules
//!
//! - [`aggregate`] -- Grouped tables over a snapshot history.
//! - [`csv_export`] -- Header-first CSV writer for the row types.
//! - [`xlsx_export`] -- Workbook writer for the pivot table.
//! - [`export`] -- The four-file bundle written per regime.
//! - [`manifest`] -- The experiment-level JSON manifest.
//! - [`error`] -- [`ReportError`].

pub mod aggregate;
pub mod csv_export;
pub mod error;
pub mod export;
pub mod manifest;
pub mod xlsx_export;

pub use error::ReportError;
pub use export::{RegimeFiles, export_regime};
pub use manifest::{RegimeManifest, RunManifest};
