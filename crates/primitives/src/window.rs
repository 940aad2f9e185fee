//! Rolling window shape definitions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Shape of the weights applied across a rolling window.
///
/// All shapes are symmetric. A feature with no window type uses a flat window,
/// which computes the same values as [`WindowType::Boxcar`] but is omitted from
/// derived column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    /// Rectangular window, every row weighted equally.
    Boxcar,
    /// Triangular window with non-zero endpoints.
    Triang,
    /// Triangular window with zero endpoints.
    Bartlett,
    /// Hann (raised cosine) window.
    Hann,
    /// Hamming window.
    Hamming,
    /// Blackman window.
    Blackman,
}

impl WindowType {
    /// All supported window types.
    pub const ALL: [Self; 6] =
        [Self::Boxcar, Self::Triang, Self::Bartlett, Self::Hann, Self::Hamming, Self::Blackman];

    /// Returns the lowercase name used in column names.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Boxcar => "boxcar",
            Self::Triang => "triang",
            Self::Bartlett => "bartlett",
            Self::Hann => "hann",
            Self::Hamming => "hamming",
            Self::Blackman => "blackman",
        }
    }
}

impl std::fmt::Display for WindowType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown window type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown window type: {0}")]
pub struct ParseWindowTypeError(pub String);

impl FromStr for WindowType {
    type Err = ParseWindowTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseWindowTypeError(s.to_string()))
    }
}
