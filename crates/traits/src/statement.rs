//! Feature statements.

use polars::prelude::*;
use tracing::debug;
use tsfeat_math::Computation;
use tsfeat_primitives::ColumnName;

use crate::FeatureError;

/// The column a feature produces and the rule that produces it.
///
/// A statement is a mapping with at most one entry. Leaf features carry an
/// empty statement because their column is expected to exist already.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// No column is produced.
    Empty,
    /// Assign `computation` to `column`.
    Assign {
        /// Output column.
        column: ColumnName,
        /// Rule producing the column.
        computation: Computation,
    },
}

impl Statement {
    /// Create a single-entry statement.
    #[must_use]
    pub const fn assign(column: ColumnName, computation: Computation) -> Self {
        Self::Assign { column, computation }
    }

    /// Returns true if the statement produces no column.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the number of entries (zero or one).
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Assign { .. } => 1,
        }
    }

    /// Returns the output column, if any.
    #[must_use]
    pub const fn column(&self) -> Option<&ColumnName> {
        match self {
            Self::Empty => None,
            Self::Assign { column, .. } => Some(column),
        }
    }

    /// Returns the computation, if any.
    #[must_use]
    pub const fn computation(&self) -> Option<&Computation> {
        match self {
            Self::Empty => None,
            Self::Assign { computation, .. } => Some(computation),
        }
    }

    /// Look up the computation assigned to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Computation> {
        match self {
            Self::Assign { column, computation } if column == name => Some(computation),
            _ => None,
        }
    }

    /// Evaluate the statement against `df`, returning a new frame.
    ///
    /// The input frame is left untouched. An empty statement returns a copy. A
    /// rolling window longer than the frame yields an all-missing column.
    ///
    /// # Errors
    /// Returns `FeatureError::MissingDependencyColumn` if an input column is
    /// absent from `df`, or `FeatureError::Polars` if evaluation fails.
    pub fn evaluate(&self, df: &DataFrame) -> Result<DataFrame, FeatureError> {
        let Self::Assign { column, computation } = self else {
            return Ok(df.clone());
        };

        let absent = computation.inputs().into_iter().find(|c| df.column(c.as_str()).is_err());
        if let Some(missing) = absent {
            return Err(FeatureError::MissingDependencyColumn(missing.to_string()));
        }

        let expr = computation.to_expr_for_height(df.height()).alias(column.as_str());
        let out = df.clone().lazy().with_column(expr).collect()?;

        debug!(%column, %computation, rows = out.height(), "materialized feature column");

        Ok(out)
    }
}
