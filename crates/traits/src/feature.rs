//! Feature trait definitions.

use std::{ops::Deref, sync::Arc};

use polars::prelude::DataFrame;
use tsfeat_primitives::ColumnName;

use crate::{FeatureError, Statement};

/// A node in a feature graph.
///
/// Every feature names itself from its parameters and the names of the
/// features it wraps, and describes how to compute its column from theirs.
/// Features are immutable once constructed, so graphs may share nodes freely.
pub trait Feature: std::fmt::Debug + Send + Sync {
    /// Returns the name of the column this feature produces.
    ///
    /// Recomputed on every call by walking the wrapped features.
    fn column_name(&self) -> ColumnName;

    /// Returns the rule producing this feature's column.
    ///
    /// The rule references dependencies by column name only; it never
    /// evaluates their statements.
    fn statement(&self) -> Statement;

    /// Returns the directly wrapped features, in argument order.
    fn dependencies(&self) -> Vec<&dyn Feature> {
        Vec::new()
    }

    /// Evaluate this feature against `df`, returning a new frame with the
    /// feature's column appended.
    ///
    /// Dependency columns must already be present.
    ///
    /// # Errors
    /// Returns `FeatureError::MissingDependencyColumn` naming the first absent
    /// dependency column, or `FeatureError::Polars` if evaluation fails.
    fn apply(&self, df: &DataFrame) -> Result<DataFrame, FeatureError> {
        self.statement().evaluate(df)
    }
}

/// Shared handle to a feature.
///
/// Composite features hold their dependencies through this handle, so one
/// sub-feature can back several parents.
#[derive(Debug, Clone)]
pub struct FeatureRef(Arc<dyn Feature>);

impl FeatureRef {
    /// Wrap a feature in a shareable handle.
    #[must_use]
    pub fn new(feature: impl Feature + 'static) -> Self {
        Self(Arc::new(feature))
    }

    /// Returns true if both handles point at the same feature instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<F: Feature + 'static> From<F> for FeatureRef {
    fn from(feature: F) -> Self {
        Self::new(feature)
    }
}

impl From<Arc<dyn Feature>> for FeatureRef {
    fn from(feature: Arc<dyn Feature>) -> Self {
        Self(feature)
    }
}

impl Deref for FeatureRef {
    type Target = dyn Feature;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl AsRef<dyn Feature> for FeatureRef {
    fn as_ref(&self) -> &(dyn Feature + 'static) {
        &*self.0
    }
}
