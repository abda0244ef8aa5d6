//! Per-component normalization constants of a composition
//!
//! Each component's raw fitness is divided by its value at a fixed reference
//! point, `o_k + M_ref` with every coordinate of `M_ref` equal to
//! [`REFERENCE_POINT`]. The shift cancels, so the probe is the stretched and
//! rotated constant vector.

use crate::component::Component;
use crate::transform;
use ndarray::Array1;

/// Offset of the reference point from each component optimum, per coordinate
pub const REFERENCE_POINT: f64 = 5.0;

/// Magnitudes below this are treated as a vanishing normalization constant
pub const NORMALIZATION_EPSILON: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    /// Divisor applied to the raw fitness
    pub value: f64,
    /// The probe vanished and `value` was replaced by 1
    pub fallback: bool,
}

/// Compute the normalization constant of one component
pub fn normalization(component: &Component) -> Normalization {
    let probe = Array1::from_elem(component.dimension(), REFERENCE_POINT);
    let z = transform::stretch_and_rotate(probe, component);
    let value = component.function.eval(&z);
    if value.abs() < NORMALIZATION_EPSILON || !value.is_finite() {
        log::warn!(
            "normalization of {} vanishes at the reference point ({:e}), using 1.0",
            component.function,
            value
        );
        Normalization {
            value: 1.0,
            fallback: true,
        }
    } else {
        Normalization {
            value,
            fallback: false,
        }
    }
}

/// Normalization constants for a list of components
pub fn normalizations(components: &[Component]) -> Vec<Normalization> {
    components.iter().map(normalization).collect()
}
