//! Blending weights of a hybrid composition
//!
//! w_k = exp(-|x - o_k|^2 / (2 D sigma_k^2)). Every weight except the largest
//! is scaled by (1 - w_max^10), then all are divided by their sum. When the
//! sum underflows to zero the weights are uniform.

use crate::component::Component;
use ndarray::Array1;

/// Normalized blending weights of `components` at `x`
///
/// The weights are non-negative and sum to one. A component whose optimum
/// coincides with `x` receives the whole weight.
///
/// `x` must have the dimension of every component; [`crate::Problem`] checks
/// this before calling.
pub fn composite_weights(components: &[Component], x: &Array1<f64>) -> Array1<f64> {
    let k = components.len();
    if k == 0 {
        return Array1::zeros(0);
    }
    debug_assert!(
        components.iter().all(|c| c.dimension() == x.len()),
        "query of length {} for components of dimension {}",
        x.len(),
        components[0].dimension()
    );
    let d = x.len() as f64;
    let mut weights: Array1<f64> = components
        .iter()
        .map(|c| {
            let s = c.distance_squared(x);
            (-s / (2.0 * d * c.width * c.width)).exp()
        })
        .collect();

    let max = weights.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let damping = 1.0 - max.powi(10);
    for w in weights.iter_mut() {
        if *w != max {
            *w *= damping;
        }
    }

    let sum = weights.sum();
    if sum == 0.0 {
        weights.fill(1.0 / k as f64);
    } else {
        weights /= sum;
    }
    weights
}
