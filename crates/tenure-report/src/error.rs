//! Error types for report generation.

/// Errors that can occur while writing report artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Creating the output directory or a file failed.
    #[error("report I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Writing a delimited file failed.
    #[error("CSV error: {source}")]
    Csv {
        /// The underlying CSV error.
        #[from]
        source: csv::Error,
    },

    /// Writing a spreadsheet failed.
    #[error("XLSX error: {source}")]
    Xlsx {
        /// The underlying workbook error.
        #[from]
        source: rust_xlsxwriter::XlsxError,
    },

    /// Serializing the run manifest failed.
    #[error("JSON error: {source}")]
    Json {
        /// The underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}
