//! Feature graph traversal.

use polars::prelude::*;
use tracing::{debug, trace};
use tsfeat_traits::{ColumnName, Feature, FeatureError};

/// Materialize a feature and every dependency it is missing.
///
/// The graph is walked bottom-up. A node whose column is already present in
/// the frame is kept as is and its subtree is not visited. Leaf columns must
/// already exist.
///
/// # Errors
/// Returns `FeatureError::MissingDependencyColumn` naming the first absent leaf
/// column, or any error raised while applying a feature.
pub fn materialize(df: &DataFrame, feature: &dyn Feature) -> Result<DataFrame, FeatureError> {
    let mut out = df.clone();
    materialize_into(&mut out, feature)?;
    Ok(out)
}

/// Materialize each feature in turn, sharing columns produced along the way.
///
/// # Errors
/// Returns the first `FeatureError` raised; no partial frame is returned.
pub fn materialize_all(
    df: &DataFrame,
    features: &[&dyn Feature],
) -> Result<DataFrame, FeatureError> {
    let mut out = df.clone();
    for feature in features {
        materialize_into(&mut out, *feature)?;
    }
    Ok(out)
}

fn materialize_into(df: &mut DataFrame, feature: &dyn Feature) -> Result<(), FeatureError> {
    let name = feature.column_name();
    if df.column(name.as_str()).is_ok() {
        trace!(column = %name, "column already present");
        return Ok(());
    }

    let statement = feature.statement();
    if statement.is_empty() {
        return Err(FeatureError::MissingDependencyColumn(name.into_string()));
    }

    for dependency in feature.dependencies() {
        materialize_into(df, dependency)?;
    }

    debug!(column = %name, "materializing feature");
    *df = statement.evaluate(df)?;
    Ok(())
}

/// Returns the distinct leaf columns a feature graph reads, in first-seen
/// order.
#[must_use]
pub fn source_columns(feature: &dyn Feature) -> Vec<ColumnName> {
    let mut columns = Vec::new();
    collect_sources(feature, &mut columns);
    columns
}

fn collect_sources(feature: &dyn Feature, columns: &mut Vec<ColumnName>) {
    let dependencies = feature.dependencies();
    if dependencies.is_empty() {
        let name = feature.column_name();
        if !columns.contains(&name) {
            columns.push(name);
        }
        return;
    }

    for dependency in dependencies {
        collect_sources(dependency, columns);
    }
}
