//! Force on a filing: the negated gradient of the amplitude field.

use glam::DVec2;

use crate::amplitude::FieldParameters;

/// Finite-difference step used by [`gradient`].
pub const GRADIENT_STEP: f64 = 0.01;

/// Negated central-difference gradient of the amplitude at `(x, y)`.
///
/// Samples the field four times, one step either side along each axis, so
/// points on the membrane edge read the field slightly outside `[0, 1]²`.
pub fn gradient(x: f64, y: f64, params: &FieldParameters) -> DVec2 {
    let h = GRADIENT_STEP;
    let dx = params.amplitude(x + h, y) - params.amplitude(x - h, y);
    let dy = params.amplitude(x, y + h) - params.amplitude(x, y - h);
    -DVec2::new(dx, dy) / (2.0 * h)
}
