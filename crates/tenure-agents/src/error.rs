//! Error types for the `tenure-agents` crate.
//!
//! The decision policy itself never fails; only population construction
//! can be rejected.

/// Errors that can occur while building a population.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// A regime asked for zero households.
    #[error("population must contain at least one household")]
    EmptyPopulation,
}
