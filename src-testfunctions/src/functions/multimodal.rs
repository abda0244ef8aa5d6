//! Multimodal test functions
//!
//! These functions have multiple local minima and are used to test the global
//! search capabilities and exploration of optimization algorithms.

use ndarray::{Array1, Array2};
use std::f64::consts::{E, PI};

/// Weierstrass series constants
pub const WEIERSTRASS_A: f64 = 0.5;
pub const WEIERSTRASS_B: f64 = 3.0;
pub const WEIERSTRASS_K_MAX: i32 = 20;

/// Rastrigin function - highly multimodal, regular grid of local minima
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    x.iter()
        .map(|&xi| xi * xi - 10.0 * (2.0 * PI * xi).cos() + 10.0)
        .sum()
}

/// Snap a coordinate to the half-integer grid once it leaves (-0.5, 0.5)
///
/// y = x if |x| < 1/2, round(2x)/2 otherwise.
pub fn non_continuous(xi: f64) -> f64 {
    if xi.abs() < 0.5 {
        xi
    } else {
        (2.0 * xi).round() / 2.0
    }
}

/// Non-continuous Rastrigin function - Rastrigin on the snapped coordinates
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn non_continuous_rastrigin(x: &Array1<f64>) -> f64 {
    let y = x.mapv(non_continuous);
    rastrigin(&y)
}

fn weierstrass_series(v: f64) -> f64 {
    (0..=WEIERSTRASS_K_MAX)
        .map(|k| {
            WEIERSTRASS_A.powi(k) * (2.0 * PI * WEIERSTRASS_B.powi(k) * (v + 0.5)).cos()
        })
        .sum()
}

/// Weierstrass function - continuous but nowhere differentiable
///
/// f(x) = sum_i sum_k a^k cos(2 pi b^k (x_i + 0.5)) - D sum_k a^k cos(pi b^k)
///
/// with a = 0.5, b = 3, k = 0..20. The constant term is the series at the
/// origin, subtracted once for the whole vector.
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-0.5, 0.5]
pub fn weierstrass(x: &Array1<f64>) -> f64 {
    let at_origin = weierstrass_series(0.0);
    let mut value = 0.0;
    let mut offset = 0.0;
    for &xi in x.iter() {
        value += weierstrass_series(xi);
        offset += at_origin;
    }
    value - offset
}

/// Griewank function - multimodal, product term couples the variables
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-600, 600]
pub fn griewank(x: &Array1<f64>) -> f64 {
    let mut sum_squares = 0.0;
    let mut product_cos = 1.0;
    for (i, &xi) in x.iter().enumerate() {
        sum_squares += xi * xi;
        product_cos *= (xi / (1.0 + i as f64).sqrt()).cos();
    }
    1.0 + sum_squares / 4000.0 - product_cos
}

/// Ackley function - N-dimensional multimodal with a nearly flat outer region
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32, 32]
pub fn ackley(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let mut sum_sq = 0.0;
    let mut sum_cos = 0.0;
    for &xi in x.iter() {
        sum_sq += xi * xi;
        sum_cos += (2.0 * PI * xi).cos();
    }
    20.0 + E - 20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp()
}

/// Trigonometric sums B_i(x) = sum_j a_ij sin(x_j) + b_ij cos(x_j) of Schwefel's problem 2.13
pub fn schwefel_2_13_terms(a: &Array2<f64>, b: &Array2<f64>, x: &Array1<f64>) -> Array1<f64> {
    let sin_x = x.mapv(f64::sin);
    let cos_x = x.mapv(f64::cos);
    a.rows()
        .into_iter()
        .zip(b.rows())
        .map(|(ai, bi)| ai.dot(&sin_x) + bi.dot(&cos_x))
        .collect()
}

/// Schwefel's problem 2.13
///
/// f(x) = sum_i (A_i - B_i(x))^2, where A_i = B_i(alpha) is given as `target`
/// (see [`schwefel_2_13_terms`]).
/// Global minimum: f(x) = 0 at x = alpha
/// Bounds: x_i in [-pi, pi]
pub fn schwefel_2_13(
    x: &Array1<f64>,
    a: &Array2<f64>,
    b: &Array2<f64>,
    target: &Array1<f64>,
) -> f64 {
    schwefel_2_13_terms(a, b, x)
        .iter()
        .zip(target.iter())
        .map(|(&bi, &ai)| (ai - bi) * (ai - bi))
        .sum()
}
