//! Deferred column computations.

use polars::prelude::*;
use tsfeat_primitives::{ColumnName, WindowType};

use crate::{
    rolling::missing, rolling_mean, rolling_population_std, rolling_sum, shift,
};

/// A deferred, introspectable rule for producing one column from a table.
///
/// Operands are referenced strictly by column name. Nothing is evaluated until
/// the descriptor is lowered with [`Computation::to_expr`] and run against a
/// table that already holds every input column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Computation {
    /// `1` where `left >= right`, else `0`. Missing and NaN operands compare as
    /// `0`.
    GreaterOrEqual {
        /// Left operand.
        left: ColumnName,
        /// Right operand.
        right: ColumnName,
    },
    /// Column shifted by `periods` rows (negative leads).
    Shift {
        /// Shifted column.
        column: ColumnName,
        /// Row offset.
        periods: i64,
    },
    /// `(x[t] / x[t - duration]) ^ sign(duration) - 1`.
    Return {
        /// Base column.
        column: ColumnName,
        /// Signed lookback.
        duration: i64,
    },
    /// `rolling_sum(metric * weight, window) / rolling_sum(weight, flat)`.
    WeightedAverage {
        /// Averaged column.
        metric: ColumnName,
        /// Weight column.
        weight: ColumnName,
        /// Signed window length.
        duration: i64,
        /// Shape of the numerator window.
        window: Option<WindowType>,
    },
    /// Rolling mean.
    RollingMean {
        /// Averaged column.
        column: ColumnName,
        /// Signed window length.
        duration: i64,
        /// Window shape.
        window: Option<WindowType>,
    },
    /// Rolling population standard deviation.
    RollingStd {
        /// Input column.
        column: ColumnName,
        /// Signed window length.
        duration: i64,
        /// Window shape.
        window: Option<WindowType>,
    },
}

impl Computation {
    /// Returns the columns this computation reads, in operand order.
    #[must_use]
    pub fn inputs(&self) -> Vec<&ColumnName> {
        match self {
            Self::GreaterOrEqual { left, right } => vec![left, right],
            Self::WeightedAverage { metric, weight, .. } => vec![metric, weight],
            Self::Shift { column, .. }
            | Self::Return { column, .. }
            | Self::RollingMean { column, .. }
            | Self::RollingStd { column, .. } => vec![column],
        }
    }

    /// Lower this computation to an unaliased polars expression.
    #[must_use]
    pub fn to_expr(&self) -> Expr {
        match self {
            Self::GreaterOrEqual { left, right } => comparable(left)
                .gt_eq(comparable(right))
                .fill_null(lit(false))
                .cast(DataType::Int64),
            Self::Shift { column, periods } => shift(col(column.as_str()), *periods),
            Self::Return { column, duration } => {
                let base = col(column.as_str()).cast(DataType::Float64);
                let sign = duration.signum() as f64;
                (base.clone() / shift(base, *duration)).pow(lit(sign)) - lit(1.0)
            }
            Self::WeightedAverage { metric, weight, duration, window } => {
                let numerator =
                    rolling_sum(col(metric.as_str()) * col(weight.as_str()), *duration, *window);
                let denominator = rolling_sum(col(weight.as_str()), *duration, None);
                numerator / denominator
            }
            Self::RollingMean { column, duration, window } => {
                rolling_mean(col(column.as_str()), *duration, *window)
            }
            Self::RollingStd { column, duration, window } => {
                rolling_population_std(col(column.as_str()), *duration, *window)
            }
        }
    }

    /// Returns the length of the rolling window this computation aggregates
    /// over, if any.
    #[must_use]
    pub const fn window_len(&self) -> Option<u64> {
        match self {
            Self::WeightedAverage { duration, .. }
            | Self::RollingMean { duration, .. }
            | Self::RollingStd { duration, .. } => Some(duration.unsigned_abs()),
            Self::GreaterOrEqual { .. } | Self::Shift { .. } | Self::Return { .. } => None,
        }
    }

    /// Lower this computation for a table of `height` rows.
    ///
    /// A window longer than the table never fills, so it lowers straight to a
    /// missing column without building a window kernel.
    #[must_use]
    pub fn to_expr_for_height(&self, height: usize) -> Expr {
        let height = u64::try_from(height).unwrap_or(u64::MAX);
        match self.window_len() {
            Some(len) if len > height => missing(),
            _ => self.to_expr(),
        }
    }
}

/// NaN orders above every number in polars, so it is compared as missing.
fn comparable(column: &ColumnName) -> Expr {
    col(column.as_str()).cast(DataType::Float64).fill_nan(lit(NULL))
}

struct Shape(Option<WindowType>);

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(w) => write!(f, "{w}"),
            None => write!(f, "flat"),
        }
    }
}

impl std::fmt::Display for Computation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GreaterOrEqual { left, right } => write!(f, "gt_eq({left}, {right})"),
            Self::Shift { column, periods } => write!(f, "shift({column}, {periods})"),
            Self::Return { column, duration } => write!(f, "return({column}, {duration})"),
            Self::WeightedAverage { metric, weight, duration, window } => {
                write!(
                    f,
                    "weighted_average({metric}, {weight}, {duration}, {})",
                    Shape(*window)
                )
            }
            Self::RollingMean { column, duration, window } => {
                write!(f, "rolling_mean({column}, {duration}, {})", Shape(*window))
            }
            Self::RollingStd { column, duration, window } => {
                write!(f, "rolling_std({column}, {duration}, {}, ddof=0)", Shape(*window))
            }
        }
    }
}
