//! Unimodal test functions
//!
//! These functions have a single global minimum and are used to test the
//! convergence speed and precision of optimization algorithms.

use ndarray::{Array1, Array2};

/// Sphere function - simple quadratic bowl
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

/// Schwefel's problem 1.2 - sum of squared partial sums
///
/// f(x) = sum_i (sum_{j<=i} x_j)^2
///
/// Not separable and sensitive to the order of the variables. The running
/// total keeps it O(D).
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn schwefel_1_2(x: &Array1<f64>) -> f64 {
    let mut partial = 0.0;
    let mut res = 0.0;
    for &xi in x.iter() {
        partial += xi;
        res += partial * partial;
    }
    res
}

/// High conditioned elliptic function
///
/// f(x) = sum_i (10^6)^(i/(D-1)) x_i^2
///
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn elliptic(x: &Array1<f64>) -> f64 {
    let denom = (x.len().max(2) - 1) as f64;
    x.iter()
        .enumerate()
        .map(|(i, &xi)| xi * xi * 1.0e6_f64.powf(i as f64 / denom))
        .sum()
}

/// Rosenbrock function - narrow curved valley
///
/// f(x) = sum_{i=0}^{D-2} 100 (x_i^2 - x_{i+1})^2 + (x_i - 1)^2
///
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-100, 100]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    x.windows(2)
        .into_iter()
        .map(|w| {
            let t = w[0] * w[0] - w[1];
            100.0 * t * t + (w[0] - 1.0) * (w[0] - 1.0)
        })
        .sum()
}

/// Schwefel's problem 2.6 - max of absolute linear residuals
///
/// f(x) = max_i |A_i . x - b_i|
///
/// `a` is D x D and `b` has length D. With b = [`schwefel_2_6_offsets`]`(a, o)`
/// the minimum is exactly 0 at x = o.
/// Bounds: x_i in [-100, 100]
pub fn schwefel_2_6(x: &Array1<f64>, a: &Array2<f64>, b: &Array1<f64>) -> f64 {
    a.rows()
        .into_iter()
        .zip(b.iter())
        .map(|(row, &bi)| (row.dot(x) - bi).abs())
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Offsets b = A o for [`schwefel_2_6`], computed row by row with the same
/// reduction the objective uses.
pub fn schwefel_2_6_offsets(a: &Array2<f64>, o: &Array1<f64>) -> Array1<f64> {
    a.rows().into_iter().map(|row| row.dot(o)).collect()
}
