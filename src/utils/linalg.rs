// src/utils/linalg.rs

use nalgebra::Matrix3;
use std::f64::consts::TAU;

/// Default numerical tolerance for the engine (angle branches, eigenvalue
/// coincidence, self-checks). Scale-aware comparisons multiply this by the
/// magnitude of the values involved, see [`scale_of`].
pub const EPS: f64 = 1e-6;

/// Wrap an angle into the canonical `[0, 2*pi)` range.
///
/// # Arguments
/// * `angle` - Angle in radians, any magnitude
///
/// # Returns
/// The equivalent angle in `[0, 2*pi)`
pub fn wrap_two_pi(angle: f64) -> f64 {
    let mut a = angle.rem_euclid(TAU);
    // rem_euclid can return exactly TAU when the input is a tiny negative
    if a >= TAU {
        a -= TAU;
    }
    a
}

/// Magnitude scale of a set of values, floored at 1.
///
/// Used to turn the absolute tolerance [`EPS`] into a relative one:
/// eigenvalues in frequency units reach 1e8 Hz, so comparing them against
/// a fixed 1e-6 would be meaningless.
pub fn scale_of(values: &[f64]) -> f64 {
    values.iter().fold(1.0_f64, |acc, v| acc.max(v.abs()))
}

/// True if `a` and `b` agree within `EPS` relative to `scale`.
pub fn floats_close(a: f64, b: f64, scale: f64) -> bool {
    (a - b).abs() <= EPS * scale
}

/// Largest absolute entry-wise difference between two matrices.
pub fn max_abs_diff(a: &Matrix3<f64>, b: &Matrix3<f64>) -> f64 {
    let mut max = 0.0_f64;
    for i in 0..3 {
        for j in 0..3 {
            max = max.max((a[(i, j)] - b[(i, j)]).abs());
        }
    }
    max
}

/// True if two matrices agree entry-wise within `EPS` relative to `scale`.
pub fn matrices_close(a: &Matrix3<f64>, b: &Matrix3<f64>, scale: f64) -> bool {
    max_abs_diff(a, b) <= EPS * scale
}
