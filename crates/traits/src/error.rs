//! Error types for feature construction and application.

use polars::prelude::PolarsError;

/// Errors that can occur while building or applying a feature.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    /// A computation references a column absent from the input table.
    #[error("missing dependency column: {0}")]
    MissingDependencyColumn(String),

    /// A construction parameter violates a constraint.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] PolarsError),
}

impl FeatureError {
    /// Returns whether materializing dependencies first can resolve this error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::MissingDependencyColumn(_))
    }
}
