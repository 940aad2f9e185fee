//! Column name helpers shared by the windowed features.

use tsfeat_traits::{FeatureError, WindowType};

/// The `_{win_type}` segment, empty for a flat window.
pub(crate) fn window_segment(win_type: Option<WindowType>) -> String {
    win_type.map(|w| format!("_{w}")).unwrap_or_default()
}

/// Reject non-positive window lengths.
pub(crate) fn positive_duration(feature: &str, duration: i64) -> Result<i64, FeatureError> {
    if duration <= 0 {
        return Err(FeatureError::InvalidParameter(format!(
            "{feature} duration must be positive, got {duration}"
        )));
    }
    Ok(duration)
}
