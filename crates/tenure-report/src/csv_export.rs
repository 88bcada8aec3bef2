//! Delimited-text export.
//!
//! Each exported row type names its own header line through [`CsvTable`].
//! The header is written even when there are no rows, so an empty table
//! still produces a well-formed file.

use std::path::Path;

use serde::Serialize;
use tenure_types::HouseRecord;
use tracing::debug;

use crate::aggregate::{SummaryRow, WealthRow};
use crate::error::ReportError;

/// A row type with a fixed header line.
pub trait CsvTable: Serialize {
    /// Column names, in field order.
    const HEADERS: &'static [&'static str];
}

impl CsvTable for SummaryRow {
    const HEADERS: &'static [&'static str] = &["Step", "AgentType", "Ethnicity", "Count"];
}

impl CsvTable for WealthRow {
    const HEADERS: &'static [&'static str] = &["Step", "AgentType", "Wealth", "NumHouses"];
}

impl CsvTable for HouseRecord {
    const HEADERS: &'static [&'static str] = &["ID", "Price", "Rent"];
}

/// Write `rows` to `path` as comma-separated values with a header line.
///
/// # Errors
///
/// Returns [`ReportError::Csv`] if the file cannot be created or a row
/// cannot be serialized, or [`ReportError::Io`] if the final flush fails.
pub fn write_table<T: CsvTable>(path: &Path, rows: &[T]) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(T::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = rows.len(), "CSV table written");
    Ok(())
}
