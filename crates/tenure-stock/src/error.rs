//! Error types for the `tenure-stock` crate.

/// Errors that can occur while building a housing stock.
#[derive(Debug, thiserror::Error)]
pub enum StockError {
    /// A regime asked for zero houses.
    #[error("housing stock must contain at least one house")]
    EmptyStock,
}
