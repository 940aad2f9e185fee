//! Volatility feature implementation.

use tsfeat_traits::{ColumnName, Computation, Feature, FeatureRef, Statement, WindowType};

use crate::naming::window_segment;

/// Rolling population standard deviation of a feature.
///
/// The window magnitude is at least two rows; the sign of the requested
/// duration is kept, so a negative duration looks forward. A zero duration
/// is kept as zero and produces a fully missing column.
#[derive(Debug, Clone)]
pub struct VolatilityFeature {
    base: FeatureRef,
    duration: i64,
    win_type: Option<WindowType>,
}

impl VolatilityFeature {
    /// Minimum window magnitude in rows.
    pub const MIN_WINDOW: i64 = 2;

    /// Volatility of `base` over `duration` rows.
    #[must_use]
    pub fn new(base: impl Into<FeatureRef>, duration: i64) -> Self {
        let duration = duration.saturating_abs().max(Self::MIN_WINDOW) * duration.signum();
        Self { base: base.into(), duration, win_type: None }
    }

    /// Weight the window by `win_type`.
    #[must_use]
    pub const fn with_win_type(mut self, win_type: WindowType) -> Self {
        self.win_type = Some(win_type);
        self
    }

    /// The feature whose volatility is computed.
    #[must_use]
    pub const fn base(&self) -> &FeatureRef {
        &self.base
    }

    /// Effective signed window length.
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

impl Feature for VolatilityFeature {
    fn column_name(&self) -> ColumnName {
        format!(
            "{}{}_volatility_over_{}b",
            self.base.column_name(),
            window_segment(self.win_type),
            self.duration
        )
        .into()
    }

    fn statement(&self) -> Statement {
        Statement::assign(
            self.column_name(),
            Computation::RollingStd {
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
