//! Rolling average feature implementations.

use tsfeat_traits::{ColumnName, Computation, Feature, FeatureError, FeatureRef, Statement, WindowType};

use crate::naming::{positive_duration, window_segment};

/// Rolling mean of a feature over a trailing window.
#[derive(Debug, Clone)]
pub struct SimpleAverageFeature {
    base: FeatureRef,
    duration: i64,
    win_type: Option<WindowType>,
}

impl SimpleAverageFeature {
    /// Average `base` over a flat window of `duration` rows.
    ///
    /// # Errors
    /// Returns `FeatureError::InvalidParameter` if `duration` is not positive.
    pub fn new(base: impl Into<FeatureRef>, duration: i64) -> Result<Self, FeatureError> {
        let duration = positive_duration("simple average", duration)?;
        Ok(Self { base: base.into(), duration, win_type: None })
    }

    /// Weight the window by `win_type`.
    #[must_use]
    pub const fn with_win_type(mut self, win_type: WindowType) -> Self {
        self.win_type = Some(win_type);
        self
    }

    /// The averaged feature.
    #[must_use]
    pub const fn base(&self) -> &FeatureRef {
        &self.base
    }

    /// Window length in rows.
    #[must_use]
    pub const fn duration(&self) -> i64 {
        self.duration
    }

    /// Window shape, `None` for a flat window.
    #[must_use]
    pub const fn win_type(&self) -> Option<WindowType> {
        self.win_type
    }
}

impl Feature for SimpleAverageFeature {
    fn column_name(&self) -> ColumnName {
        format!(
            "{}{}_avg_over_{}b",
            self.base.column_name(),
            window_segment(self.win_type),
            self.duration
        )
        .into()
    }

    fn statement(&self) -> Statement {
        Statement::assign(
            self.column_name(),
            Computation::RollingMean {
                column: self.base.column_name(),
                duration: self.duration,
                window: self.win_type,
            },
        )
    }

    fn dependencies(&self) -> Vec<&dyn Feature> {
        vec![&*self.base]
    }
}

/// Rolling average of a metric weighted by another feature.
///
/// Computes `rolling_sum(metric * weight) / rolling_sum(weight)`. The window
/// type shapes the numerator only; the denominator always sums over a flat
/// window.
#[derive(Debug, Clone)]
pub struct WeightedAverageFeature {
    metric: FeatureRef,
    weight: FeatureRef,
    duration: i64,
    win_type: Option<WindowType>,
}

impl WeightedAverageFeature {
    /// Average `metric` weighted by `weight` over `duration` rows.
    ///
    /// # Errors
    /// Returns `FeatureError::InvalidParameter` if `duration` is not positive.
    pub fn new(
        metric: impl Into<FeatureRef>,
        weight: impl Into<FeatureRef>,
        duration: i64,
    ) -> Result<Self, FeatureError> {
        let duration = positive_duration("weighted average", duration)?;
        Ok(Self { metric: metric.into(), weight: weight.into(), duration, win_type: None })
    }

    /// Shape the numerator window by `win_type`.
    #[must_use]
    pub const fn with_win_type(mut self, win_type: WindowType) -> Self {
        self.win_type = Some(win_type);
        self
    }

    /// The averaged feature.
    #[must_use]
    pub const fn metric(&self) -> &FeatureRef {
        &self.metric
    }

    /// The weighting feature.
    #[must_use]
    pub const fn weight(&self) -> &FeatureRef {
        &self.weight
    }

    /// Window length in rows.
    #[must_use]
    pub const fn duration(&self) -> i64 {
        self.duration
    }

    /// Numerator window shape, `None` for a flat window.
    #[must_use]
    pub const fn win_type(&self) -> Option<WindowType> {
        self.win_type
    }
}

impl Feature for WeightedAverageFeature {
    fn column_name(&self) -> ColumnName {
        format!(
            "{}{}_weighted_by_{}_over_{}b",
            self.metric.column_name(),
            window_segment(self.win_type),
            self.weight.column_name(),
            self.duration
        )
        .into()
    }

    fn statement(&self) -> Statement {
        Statement::assign(
            self.column_name(),
            Computation::WeightedAverage {
                metric: self.metric.column_name(),
                weight: self.weight.column_name(),
                duration: self.duration,
                window: self.win_type,
            },
        )
    }

    fn dependencies(&self) -> Vec<&dyn Feature> {
        vec![&*self.metric, &*self.weight]
    }
}
