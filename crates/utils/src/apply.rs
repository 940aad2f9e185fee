//! Ordered feature application.

use polars::prelude::*;
use tracing::debug;
use tsfeat_traits::{Feature, FeatureError};

/// Apply features in order, feeding each result into the next.
///
/// Each feature's dependencies must either be source columns or appear
/// earlier in `features`.
///
/// # Arguments
/// * `df` - Input DataFrame, left untouched
/// * `features` - Features to apply, dependencies first
///
/// # Returns
/// DataFrame with one additional column per feature.
///
/// # Errors
/// Returns the first `FeatureError` raised; no partial frame is returned.
pub fn apply_features(df: &DataFrame, features: &[&dyn Feature]) -> Result<DataFrame, FeatureError> {
    features.iter().enumerate().try_fold(df.clone(), |acc, (step, feature)| {
        debug!(step, column = %feature.column_name(), "applying feature");
        feature.apply(&acc)
    })
}
