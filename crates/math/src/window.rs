//! Window kernel generation.

use std::f64::consts::PI;

use ndarray::Array1;
use tsfeat_primitives::WindowType;

/// Generate the symmetric weights of a window shape.
///
/// # Arguments
/// * `len` - Number of rows in the window
/// * `window` - Shape of the window
///
/// # Returns
/// Array of `len` weights, oldest row first. Weights are not normalized.
#[must_use]
pub fn window_weights(len: usize, window: WindowType) -> Array1<f64> {
    if len <= 1 {
        return Array1::ones(len);
    }

    let m = len as f64;
    let span = m - 1.0;

    Array1::from_shape_fn(len, |k| {
        let k = k as f64;
        match window {
            WindowType::Boxcar => 1.0,
            WindowType::Triang => {
                let scale = if len % 2 == 0 { m } else { m + 1.0 };
                1.0 - (2.0 * k - span).abs() / scale
            }
            WindowType::Bartlett => 1.0 - (2.0 * k / span - 1.0).abs(),
            WindowType::Hann => 0.5 - 0.5 * (2.0 * PI * k / span).cos(),
            WindowType::Hamming => 0.54 - 0.46 * (2.0 * PI * k / span).cos(),
            WindowType::Blackman => {
                0.42 - 0.5 * (2.0 * PI * k / span).cos() + 0.08 * (4.0 * PI * k / span).cos()
            }
        }
    })
}
