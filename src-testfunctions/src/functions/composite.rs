//! Expanded test functions
//!
//! Each of these applies a two-variable kernel to consecutive coordinate
//! pairs (x_i, x_{i+1}), wrapping the last coordinate around to the first.

use crate::functions::multimodal::non_continuous;
use ndarray::Array1;

/// Schaffer's F6 kernel on a coordinate pair
///
/// g(x, y) = 0.5 + (sin^2(sqrt(x^2 + y^2)) - 0.5) / (1 + 0.001 (x^2 + y^2))^2
pub fn schaffer_f6(x: f64, y: f64) -> f64 {
    let r2 = x * x + y * y;
    let s = r2.sqrt().sin();
    let d = 1.0 + 0.001 * r2;
    0.5 + (s * s - 0.5) / (d * d)
}

fn expanded<F: Fn(f64, f64) -> f64>(x: &Array1<f64>, kernel: F) -> f64 {
    let n = x.len();
    (0..n).map(|i| kernel(x[i], x[(i + 1) % n])).sum()
}

/// Expanded Schaffer F6 function
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn expanded_schaffer_f6(x: &Array1<f64>) -> f64 {
    expanded(x, schaffer_f6)
}

/// Non-continuous expanded Schaffer F6 function
/// Coordinates are snapped to the half-integer grid outside (-0.5, 0.5)
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn non_continuous_expanded_schaffer_f6(x: &Array1<f64>) -> f64 {
    let y = x.mapv(non_continuous);
    expanded(&y, schaffer_f6)
}

/// Griewank applied to the two-variable Rosenbrock term (F8F2)
fn griewank_of_rosenbrock(a: f64, b: f64) -> f64 {
    let t = a * a - b;
    let r = 100.0 * t * t + (a - 1.0) * (a - 1.0);
    r * r / 4000.0 - r.cos() + 1.0
}

/// Expanded extended Griewank plus Rosenbrock function (F8F2)
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-5, 5]
pub fn expanded_griewank_rosenbrock(x: &Array1<f64>) -> f64 {
    expanded(x, griewank_of_rosenbrock)
}
