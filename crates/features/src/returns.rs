//! Return feature implementation.

use tsfeat_traits::{ColumnName, Computation, Feature, FeatureRef, Statement};

/// Relative change of a feature over a number of rows.
///
/// Computes `(x[t] / x[t - duration]) ^ sign(duration) - 1`. A negative
/// duration gives the forward return. A zero duration is accepted and yields
/// `0` on every row with a defined value.
#[derive(Debug, Clone)]
pub struct ReturnFeature {
    base: FeatureRef,
    duration: i64,
}

impl ReturnFeature {
    /// Default lookback in rows.
    pub const DEFAULT_DURATION: i64 = 1;

    /// One-row return of `base`.
    #[must_use]
    pub fn new(base: impl Into<FeatureRef>) -> Self {
        Self { base: base.into(), duration: Self::DEFAULT_DURATION }
    }

    /// Set the signed lookback.
    #[must_use]
    pub const fn with_duration(mut self, duration: i64) -> Self {
        self.duration = duration;
        self
    }

    /// The feature whose return is computed.
    #[must_use]
    pub const fn base(&self) -> &FeatureRef {
        &self.base
    }

    /// Signed lookback in rows.
    #[must_use]
    pub const fn duration(&self) -> i64 {
        self.duration
    }
}

impl Feature for ReturnFeature {
    fn column_name(&self) -> ColumnName {
        format!("{}_{}b_return", self.base.column_name(), self.duration).into()
    }

    fn statement(&self) -> Statement {
        Statement::assign(
            self.column_name(),
            Computation::Return { column: self.base.column_name(), duration: self.duration },
        )
    }

    fn dependencies(&self) -> Vec<&dyn Feature> {
        vec![&*self.base]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use polars::prelude::*;
    use tsfeat_traits::FeatureError;

    use super::*;
    use crate::{LagFeature, LeafFeature};

    fn returns(values: &[f64], duration: i64) -> Vec<Option<f64>> {
        let df = df! { "price" => values }.unwrap();
        let feature = ReturnFeature::new(LeafFeature::new("price")).with_duration(duration);
        let out = feature.apply(&df).unwrap();
        out.column(feature.column_name().as_str()).unwrap().f64().unwrap().into_iter().collect()
    }

    #[test]
    fn return_defaults_to_one_row() {
        let feature = ReturnFeature::new(LeafFeature::new("price"));
        assert_eq!(feature.duration(), 1);
        assert_eq!(feature.column_name(), "price_1b_return");
    }

    #[test]
    fn one_row_return() {
        let out = returns(&[100.0, 110.0, 121.0], 1);
        assert_eq!(out[0], None);
        assert_relative_eq!(out[1].unwrap(), 0.10, epsilon = 1e-12);
        assert_relative_eq!(out[2].unwrap(), 0.10, epsilon = 1e-12);
    }

    #[test]
    fn forward_return_is_not_inverted() {
        let out = returns(&[100.0, 110.0, 121.0], -1);
        assert_relative_eq!(out[0].unwrap(), 0.10, epsilon = 1e-12);
        assert_relative_eq!(out[1].unwrap(), 0.10, epsilon = 1e-12);
        assert_eq!(out[2], None);
    }

    #[test]
    fn two_row_return() {
        let out = returns(&[100.0, 110.0, 121.0], 2);
        assert_eq!(out[..2], [None, None]);
        assert_relative_eq!(out[2].unwrap(), 0.21, epsilon = 1e-12);
    }

    #[test]
    fn zero_duration_is_all_zero() {
        // sign(0) == 0 collapses the formula to (x / x) ^ 0 - 1.
        let feature = ReturnFeature::new(LeafFeature::new("price")).with_duration(0);
        assert_eq!(feature.column_name(), "price_0b_return");
        assert_eq!(returns(&[100.0, 110.0, 121.0], 0), vec![Some(0.0), Some(0.0), Some(0.0)]);
    }

    #[test]
    fn return_of_lag_name() {
        let feature = ReturnFeature::new(LagFeature::new(LeafFeature::new("price"), 1));
        assert_eq!(feature.column_name(), "price_1b_lag_1b_return");
    }

    #[test]
    fn return_of_lag_requires_lag_column() {
        let df = df! { "price" => &[100.0, 110.0, 121.0, 133.1] }.unwrap();
        let lag = LagFeature::new(LeafFeature::new("price"), 1);
        let feature = ReturnFeature::new(lag.clone());

        let err = feature.apply(&df).unwrap_err();
        assert!(
            matches!(err, FeatureError::MissingDependencyColumn(ref c) if c == "price_1b_lag")
        );

        let out = feature.apply(&lag.apply(&df).unwrap()).unwrap();
        let values: Vec<Option<f64>> =
            out.column("price_1b_lag_1b_return").unwrap().f64().unwrap().into_iter().collect();
        assert_eq!(values[..2], [None, None]);
        assert_relative_eq!(values[2].unwrap(), 0.10, epsilon = 1e-12);
        assert_relative_eq!(values[3].unwrap(), 0.10, epsilon = 1e-12);
        assert_eq!(out.width(), 3);
    }
}
