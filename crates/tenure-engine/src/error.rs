//! Error types for the experiment driver binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during configuration, simulation and export.

/// Top-level error for the experiment driver.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: tenure_core::config::ConfigError,
    },

    /// Planning or running a regime failed.
    #[error("experiment error: {source}")]
    Experiment {
        /// The underlying experiment error.
        #[from]
        source: tenure_core::experiment::ExperimentError,
    },

    /// Writing reports or the manifest failed.
    #[error("report error: {source}")]
    Report {
        /// The underlying report error.
        #[from]
        source: tenure_report::ReportError,
    },
}
