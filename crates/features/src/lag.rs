//! Lag feature implementation.

use tsfeat_traits::{ColumnName, Computation, Feature, FeatureRef, Statement};

/// A feature's values shifted by a number of rows.
///
/// A positive lag looks back in history; a negative lag leads. Rows without a
/// value at that offset are missing.
#[derive(Debug, Clone)]
pub struct LagFeature {
    base: FeatureRef,
    lag: i64,
}

impl LagFeature {
    /// Lag `base` by `lag` rows.
    #[must_use]
    pub fn new(base: impl Into<FeatureRef>, lag: i64) -> Self {
        Self { base: base.into(), lag }
    }

    /// The lagged feature.
    #[must_use]
    pub const fn base(&self) -> &FeatureRef {
        &self.base
    }

    /// Row offset.
    #[must_use]
    pub const fn lag(&self) -> i64 {
        self.lag
    }
}

impl Feature for LagFeature {
    fn column_name(&self) -> ColumnName {
        format!("{}_{}b_lag", self.base.column_name(), self.lag).into()
    }

    fn statement(&self) -> Statement {
        Statement::assign(
            self.column_name(),
            Computation::Shift { column: self.base.column_name(), periods: self.lag },
        )
    }

    fn dependencies(&self) -> Vec<&dyn Feature> {
        vec![&*self.base]
    }
}

#[cfg(test)]
mod tests {
    use polars::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::LeafFeature;

    fn lagged(values: &[f64], lag: i64) -> Vec<Option<f64>> {
        let df = df! { "x" => values }.unwrap();
        let feature = LagFeature::new(LeafFeature::new("x"), lag);
        let out = feature.apply(&df).unwrap();
        out.column(feature.column_name().as_str()).unwrap().f64().unwrap().into_iter().collect()
    }

    #[rstest]
    #[case(1, "price_1b_lag")]
    #[case(-3, "price_-3b_lag")]
    #[case(0, "price_0b_lag")]
    fn lag_column_name(#[case] lag: i64, #[case] expected: &str) {
        let feature = LagFeature::new(LeafFeature::new("price"), lag);
        assert_eq!(feature.column_name(), expected);
    }

    #[test]
    fn lag_shifts_back() {
        assert_eq!(lagged(&[1.0, 2.0, 3.0, 4.0], 2), vec![None, None, Some(1.0), Some(2.0)]);
    }

    #[test]
    fn negative_lag_leads() {
        assert_eq!(lagged(&[1.0, 2.0, 3.0, 4.0], -1), vec![Some(2.0), Some(3.0), Some(4.0), None]);
    }

    #[test]
    fn lag_preserves_existing_columns() {
        let df = df! {
            "x" => &[1.0, 2.0, 3.0],
            "y" => &[7.0, 8.0, 9.0],
        }
        .unwrap();
        let out = LagFeature::new(LeafFeature::new("x"), 1).apply(&df).unwrap();

        assert_eq!(out.width(), 3);
        assert_eq!(out.height(), 3);
        assert!(out.select(["x", "y"]).unwrap().equals(&df));
    }

    #[test]
    fn lag_statement_references_base_by_name() {
        let feature = LagFeature::new(LeafFeature::new("price"), 2);
        let stmt = feature.statement();
        assert_eq!(stmt.column().unwrap(), "price_2b_lag");
        assert_eq!(
            stmt.get("price_2b_lag"),
            Some(&Computation::Shift { column: "price".into(), periods: 2 })
        );
    }
}
