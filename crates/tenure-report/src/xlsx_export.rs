//! Spreadsheet export of the step-by-type pivot table.
//!
//! Layout: cell A1 holds `Step`, the rest of row 1 holds the agent type
//! labels, and each following row holds one step with its values.

use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::debug;

use crate::aggregate::PivotTable;
use crate::error::ReportError;

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Sheet1";

/// Write `table` to a new workbook at `path`.
///
/// # Errors
///
/// Returns [`ReportError::Xlsx`] if a cell cannot be written or the file
/// cannot be saved.
pub fn write_pivot_table(path: &Path, table: &PivotTable) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    worksheet.write_string(0, 0, "Step")?;
    for (col, agent_type) in (1_u16..).zip(&table.columns) {
        worksheet.write_string(0, col, agent_type.label())?;
    }

    for (row, pivot_row) in (1_u32..).zip(&table.rows) {
        worksheet.write_number(row, 0, step_cell(pivot_row.step))?;
        for (col, &value) in (1_u16..).zip(&pivot_row.values) {
            worksheet.write_number(row, col, value)?;
        }
    }

    workbook.save(path)?;

    debug!(
        path = %path.display(),
        steps = table.rows.len(),
        columns = table.columns.len(),
        "Pivot table written"
    );
    Ok(())
}

// Step counts stay far below 2^53, so the conversion is exact.
#[allow(clippy::cast_precision_loss)]
const fn step_cell(step: u64) -> f64 {
    step as f64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tenure_types::AgentType;

    use super::*;
    use crate::aggregate::PivotRow;

    #[test]
    fn writes_workbook_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pivot.xlsx");
        let table = PivotTable {
            columns: vec![AgentType::Displaced, AgentType::Owner],
            rows: vec![
                PivotRow {
                    step: 1,
                    values: vec![50.0, 50.0],
                },
                PivotRow {
                    step: 2,
                    values: vec![40.5, 0.0],
                },
            ],
        };

        write_pivot_table(&path, &table).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // An xlsx file is a zip archive.
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn empty_table_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");

        write_pivot_table(&path, &PivotTable::default()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn step_cell_is_exact_for_small_steps() {
        assert!((step_cell(30) - 30.0).abs() < f64::EPSILON);
    }
}
