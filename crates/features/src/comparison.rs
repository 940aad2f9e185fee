//! Logical comparison feature implementation.

use tsfeat_traits::{ColumnName, Computation, Feature, FeatureRef, Statement};

/// Element-wise `first >= second` as a `1`/`0` indicator.
///
/// Rows where either operand is missing compare as `0`.
#[derive(Debug, Clone)]
pub struct GreaterOrEqualFeature {
    first: FeatureRef,
    second: FeatureRef,
}

impl GreaterOrEqualFeature {
    /// Compare `first` against `second`.
    #[must_use]
    pub fn new(first: impl Into<FeatureRef>, second: impl Into<FeatureRef>) -> Self {
        Self { first: first.into(), second: second.into() }
    }

    /// Left-hand feature.
    #[must_use]
    pub const fn first(&self) -> &FeatureRef {
        &self.first
    }

    /// Right-hand feature.
    #[must_use]
    pub const fn second(&self) -> &FeatureRef {
        &self.second
    }
}

impl Feature for GreaterOrEqualFeature {
    fn column_name(&self) -> ColumnName {
        format!("{}_gt_or_eq_{}", self.first.column_name(), self.second.column_name()).into()
    }

    fn statement(&self) -> Statement {
        Statement::assign(
            self.column_name(),
            Computation::GreaterOrEqual {
                left: self.first.column_name(),
                right: self.second.column_name(),
            },
        )
    }

    fn dependencies(&self) -> Vec<&dyn Feature> {
        vec![&*self.first, &*self.second]
    }
}

#[cfg(test)]
mod tests {
    use polars::prelude::*;

    use super::*;
    use crate::{LagFeature, LeafFeature, ReturnFeature};

    fn indicator(df: &DataFrame, feature: &GreaterOrEqualFeature) -> Vec<Option<i64>> {
        let out = feature.apply(df).unwrap();
        out.column(feature.column_name().as_str()).unwrap().i64().unwrap().into_iter().collect()
    }

    #[test]
    fn comparison_column_name() {
        let feature = GreaterOrEqualFeature::new(LeafFeature::new("close"), LeafFeature::new("open"));
        assert_eq!(feature.column_name(), "close_gt_or_eq_open");
    }

    #[test]
    fn comparison_nested_name() {
        let close = FeatureRef::new(LeafFeature::new("close"));
        let feature = GreaterOrEqualFeature::new(close.clone(), LagFeature::new(close, 1));
        assert_eq!(feature.column_name(), "close_gt_or_eq_close_1b_lag");
    }

    #[test]
    fn comparison_indicator() {
        let df = df! {
            "first" => &[1.0, 2.0, 3.0],
            "second" => &[2.0, 2.0, 2.0],
        }
        .unwrap();
        let feature = GreaterOrEqualFeature::new(LeafFeature::new("first"), LeafFeature::new("second"));
        assert_eq!(indicator(&df, &feature), vec![Some(0), Some(1), Some(1)]);
    }

    #[test]
    fn comparison_missing_operand_is_zero() {
        let df = df! {
            "a" => &[Some(5.0), None],
            "b" => &[Some(1.0), Some(1.0)],
        }
        .unwrap();
        let feature = GreaterOrEqualFeature::new(LeafFeature::new("a"), LeafFeature::new("b"));
        assert_eq!(indicator(&df, &feature), vec![Some(1), Some(0)]);
    }

    #[test]
    fn comparison_undefined_return_is_zero() {
        // 0/0 is NaN and 1/0 is infinite.
        let df = df! {
            "price" => &[0.0, 0.0, 1.0],
            "zero" => &[0.0, 0.0, 0.0],
        }
        .unwrap();
        let ret = ReturnFeature::new(LeafFeature::new("price"));
        let feature = GreaterOrEqualFeature::new(ret.clone(), LeafFeature::new("zero"));

        let with_return = ret.apply(&df).unwrap();
        assert_eq!(indicator(&with_return, &feature), vec![Some(0), Some(0), Some(1)]);
    }

    #[test]
    fn comparison_dependencies_in_order() {
        let feature = GreaterOrEqualFeature::new(LeafFeature::new("a"), LeafFeature::new("b"));
        let names: Vec<ColumnName> = feature.dependencies().iter().map(|d| d.column_name()).collect();
        assert_eq!(names, vec![ColumnName::from("a"), ColumnName::from("b")]);
    }
}
