//! Signed rolling-window and shift expressions.
//!
//! Window lengths are signed. A positive length aggregates the current row and
//! the rows before it, a negative length aggregates the current row and the rows
//! after it, and a zero length produces an all-missing column. Every aggregate
//! requires a full window; rows without one are null.

use polars::prelude::*;
use tsfeat_primitives::WindowType;

use crate::window_weights;

/// Shift a column by `periods` rows.
///
/// Positive periods look back in history, negative periods look ahead. Vacated
/// rows are null.
pub fn shift(expr: Expr, periods: i64) -> Expr {
    expr.shift(lit(periods))
}

/// Rolling sum over a signed window, weighted by `window` when set.
///
/// A weighted sum is `Σ wᵢxᵢ` with the unnormalized kernel weights.
pub fn rolling_sum(expr: Expr, duration: i64, window: Option<WindowType>) -> Expr {
    oriented(duration, |len| match window {
        None => as_float(expr).rolling_sum(full_window(len, None)),
        Some(shape) => weighted_sum(expr, len, window_weights(len, shape).to_vec()),
    })
}

/// Rolling mean over a signed window, weighted by `window` when set.
///
/// A weighted mean is `Σ wᵢxᵢ / Σ wᵢ`.
pub fn rolling_mean(expr: Expr, duration: i64, window: Option<WindowType>) -> Expr {
    oriented(duration, |len| match window {
        None => as_float(expr).rolling_mean(full_window(len, None)),
        Some(shape) => match normalized_weights(len, shape) {
            Some(weights) => weighted_sum(expr, len, weights),
            None => missing(),
        },
    })
}

/// Rolling population standard deviation (`ddof = 0`) over a signed window.
///
/// With a window shape the variance is `Σ wᵢ(xᵢ - μ)² / Σ wᵢ`, where `μ` is the
/// weighted mean of the window.
pub fn rolling_population_std(expr: Expr, duration: i64, window: Option<WindowType>) -> Expr {
    oriented(duration, |len| match window {
        None => as_float(expr).rolling_std(RollingOptionsFixedWindow {
            fn_params: Some(RollingFnParams::Var(RollingVarParams { ddof: 0 })),
            ..full_window(len, None)
        }),
        Some(shape) => match normalized_weights(len, shape) {
            Some(weights) => weighted_variance(as_float(expr), len, weights).sqrt(),
            None => missing(),
        },
    })
}

fn oriented(duration: i64, aggregate: impl FnOnce(usize) -> Expr) -> Expr {
    let len = usize::try_from(duration.unsigned_abs()).unwrap_or(usize::MAX);
    match duration.signum() {
        0 => missing(),
        1 => aggregate(len),
        // Backward aggregate at t+len-1 covers rows t..t+len-1.
        _ => {
            let lead = i64::try_from(len - 1).unwrap_or(i64::MAX);
            aggregate(len).shift(lit(-lead))
        }
    }
}

fn full_window(len: usize, weights: Option<Vec<f64>>) -> RollingOptionsFixedWindow {
    RollingOptionsFixedWindow { window_size: len, min_periods: len, weights, ..Default::default() }
}

/// Weighted kernels only run on null-free input. Nulls are zeroed before the
/// kernel and any window that held one is masked back to null afterwards, so
/// NaN inputs propagate exactly as they do through a flat window.
fn weighted_sum(expr: Expr, len: usize, weights: Vec<f64>) -> Expr {
    let x = as_float(expr);
    let gaps = x.clone().is_null().cast(DataType::Float64).rolling_sum(full_window(len, None));
    when(gaps.gt(lit(0.0)))
        .then(missing())
        .otherwise(x.fill_null(lit(0.0)).rolling_sum(full_window(len, Some(weights))))
}

/// Deviations are taken lag by lag from the mean of their own window.
fn weighted_variance(x: Expr, len: usize, weights: Vec<f64>) -> Expr {
    let mean = weighted_sum(x.clone(), len, weights.clone());
    // The kernel applies weights oldest first; lag 0 is the newest row.
    weights
        .into_iter()
        .rev()
        .zip(0_i64..)
        .map(|(weight, lag)| {
            let deviation = shift(x.clone(), lag) - mean.clone();
            lit(weight) * deviation.clone() * deviation
        })
        .reduce(|acc, term| acc + term)
        .unwrap_or_else(missing)
}

fn normalized_weights(len: usize, shape: WindowType) -> Option<Vec<f64>> {
    let mut weights = window_weights(len, shape);
    let total = weights.sum();
    if total == 0.0 {
        return None;
    }
    weights /= total;
    Some(weights.to_vec())
}

fn as_float(expr: Expr) -> Expr {
    expr.cast(DataType::Float64)
}

pub(crate) fn missing() -> Expr {
    lit(NULL).cast(DataType::Float64)
}
