//! Affine input transform of a component
//!
//! z = x - o + offset, stretched by lambda and rotated by M. With a uniform
//! stretch the division happens before the rotation (the two commute); a
//! per-axis stretch divides the rotated coordinates.

use crate::component::{Component, Stretch};
use ndarray::{Array1, Array2};

/// Map a query point into the local coordinates of `component`
pub fn transform(x: &Array1<f64>, component: &Component) -> Array1<f64> {
    let offset = component.optimum_offset;
    let shifted: Array1<f64> = x
        .iter()
        .zip(component.shift.iter())
        .map(|(xi, oi)| (xi - oi) + offset)
        .collect();
    stretch_and_rotate(shifted, component)
}

/// Stretch and rotate an already shifted vector
pub fn stretch_and_rotate(z: Array1<f64>, component: &Component) -> Array1<f64> {
    let rotation = component.rotation.as_ref();
    if component.stretch.is_identity() {
        return rotate(z, rotation);
    }
    match &component.stretch {
        Stretch::Uniform(lambda) => rotate(z / *lambda, rotation),
        Stretch::PerAxis(lambda) => rotate(z, rotation) / lambda,
    }
}

fn rotate(z: Array1<f64>, rotation: Option<&Array2<f64>>) -> Array1<f64> {
    match rotation {
        Some(m) => m.dot(&z),
        None => z,
    }
}
