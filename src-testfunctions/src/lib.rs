//! Basic landscape functions of the CEC 2005 benchmark suite
//!
//! Every benchmark in the suite is built from a handful of classic test
//! functions evaluated on a shifted, rotated and stretched input. This crate
//! holds those functions as plain `&Array1<f64> -> f64` maps:
//!
//! - **Unimodal**: sphere, Schwefel 1.2, high conditioned elliptic, Rosenbrock, Schwefel 2.6
//! - **Multimodal**: Rastrigin (plain and non-continuous), Weierstrass, Griewank, Ackley, Schwefel 2.13
//! - **Composite**: expanded Schaffer F6 (plain and non-continuous), expanded Griewank plus Rosenbrock
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use cecbench_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert_eq!(sphere(&x), 0.0);
//!
//! let bounds = get_function_bounds("rastrigin");
//! assert_eq!(bounds, Some(vec![(-5.0, 5.0); 2]));
//! ```

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod functions;
pub use functions::*;

/// Metadata for a test function including bounds and known minima
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Bounds for each dimension (min, max)
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Typical dimension(s) for the function
    pub dimensions: Vec<usize>,
}

/// Create bounds matrix for optimization (2 x n matrix)
/// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Array2<f64> {
    Array2::from_shape_fn((2, n), |(i, _)| if i == 0 { lower } else { upper })
}

fn entry(
    name: &str,
    bound: f64,
    minimum: (Vec<f64>, f64),
    description: &str,
    multimodal: bool,
) -> (String, FunctionMetadata) {
    (
        name.to_string(),
        FunctionMetadata {
            name: name.to_string(),
            bounds: vec![(-bound, bound); 2], // Default 2D, but can be N-dimensional
            global_minima: vec![minimum],
            description: description.to_string(),
            multimodal,
            dimensions: vec![2, 10, 30, 50],
        },
    )
}

/// Get metadata for the basic functions (vector-only signatures)
///
/// Schwefel 2.6 and 2.13 are not listed: they need their matrices.
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let origin = || (vec![0.0, 0.0], 0.0);
    [
        entry("sphere", 100.0, origin(), "N-dimensional quadratic bowl", false),
        entry(
            "schwefel_1_2",
            100.0,
            origin(),
            "Sum of squared partial sums, non-separable",
            false,
        ),
        entry(
            "elliptic",
            100.0,
            origin(),
            "High conditioned elliptic, condition number 1e6",
            false,
        ),
        entry(
            "rosenbrock",
            100.0,
            (vec![1.0, 1.0], 0.0),
            "N-dimensional banana valley",
            false,
        ),
        entry("rastrigin", 5.0, origin(), "Regular grid of local minima", true),
        entry(
            "non_continuous_rastrigin",
            5.0,
            origin(),
            "Rastrigin on half-integer snapped coordinates",
            true,
        ),
        entry(
            "weierstrass",
            0.5,
            origin(),
            "Continuous, nowhere differentiable fractal series",
            true,
        ),
        entry("griewank", 600.0, origin(), "Product coupled multimodal", true),
        entry("ackley", 32.0, origin(), "Flat outer region with a deep central hole", true),
        entry(
            "expanded_schaffer_f6",
            100.0,
            origin(),
            "Schaffer F6 kernel over consecutive pairs",
            true,
        ),
        entry(
            "non_continuous_expanded_schaffer_f6",
            5.0,
            origin(),
            "Expanded Schaffer F6 on half-integer snapped coordinates",
            true,
        ),
        entry(
            "expanded_griewank_rosenbrock",
            5.0,
            (vec![1.0, 1.0], 0.0),
            "Griewank of the Rosenbrock pair term (F8F2)",
            true,
        ),
    ]
    .into_iter()
    .collect()
}

/// Helper function to get bounds for a specific function from metadata
/// Returns None if function is not found in metadata
pub fn get_function_bounds(function_name: &str) -> Option<Vec<(f64, f64)>> {
    let metadata = get_function_metadata();
    metadata.get(function_name).map(|meta| meta.bounds.clone())
}

/// Helper function to get bounds as a Vec, falling back to `default_bounds`
/// in every dimension when the function is unknown
pub fn get_function_bounds_vec(
    function_name: &str,
    n: usize,
    default_bounds: (f64, f64),
) -> Vec<(f64, f64)> {
    match get_function_bounds(function_name) {
        Some(bounds) if !bounds.is_empty() => vec![bounds[0]; n],
        _ => vec![default_bounds; n],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    /// Helper function to get a function by name and call it
    /// This uses a match statement to map function names to actual function calls
    fn call_function(name: &str, x: &Array1<f64>) -> Option<f64> {
        match name {
            "sphere" => Some(sphere(x)),
            "schwefel_1_2" => Some(schwefel_1_2(x)),
            "elliptic" => Some(elliptic(x)),
            "rosenbrock" => Some(rosenbrock(x)),
            "rastrigin" => Some(rastrigin(x)),
            "non_continuous_rastrigin" => Some(non_continuous_rastrigin(x)),
            "weierstrass" => Some(weierstrass(x)),
            "griewank" => Some(griewank(x)),
            "ackley" => Some(ackley(x)),
            "expanded_schaffer_f6" => Some(expanded_schaffer_f6(x)),
            "non_continuous_expanded_schaffer_f6" => Some(non_continuous_expanded_schaffer_f6(x)),
            "expanded_griewank_rosenbrock" => Some(expanded_griewank_rosenbrock(x)),
            _ => None,
        }
    }

    #[test]
    fn test_all_function_minima() {
        let metadata = get_function_metadata();
        let tolerance = 1e-10;

        for (func_name, meta) in metadata.iter() {
            for (minimum_location, expected_value) in &meta.global_minima {
                let x = Array1::from_vec(minimum_location.clone());
                let actual_value = call_function(func_name, &x)
                    .unwrap_or_else(|| panic!("{} missing from the test dispatcher", func_name));
                let error = (actual_value - expected_value).abs();
                assert!(
                    error <= tolerance,
                    "Function {} failed: at {:?}, expected {:.10}, got {:.10}, error {:.2e}",
                    func_name,
                    minimum_location,
                    expected_value,
                    actual_value,
                    error
                );
            }
        }
    }

    #[test]
    fn test_textbook_forms_unshifted() {
        let x = Array1::from_vec(vec![0.7, -1.2, 2.5, 0.05]);
        let pi = std::f64::consts::PI;

        let sphere_ref: f64 = x.iter().map(|v| v * v).sum();
        assert!((sphere(&x) - sphere_ref).abs() < 1e-12);

        let rastrigin_ref: f64 = x
            .iter()
            .map(|v| v * v - 10.0 * (2.0 * pi * v).cos() + 10.0)
            .sum();
        assert!((rastrigin(&x) - rastrigin_ref).abs() < 1e-12);

        let sum_sq: f64 = x.iter().map(|v| v * v).sum();
        let prod: f64 = x
            .iter()
            .enumerate()
            .map(|(i, v)| (v / ((i + 1) as f64).sqrt()).cos())
            .product();
        assert!((griewank(&x) - (1.0 + sum_sq / 4000.0 - prod)).abs() < 1e-12);
    }

    #[test]
    fn test_schwefel_1_2_is_order_sensitive() {
        let forward = Array1::from_vec(vec![1.0, 2.0, 3.0]);
        let backward = Array1::from_vec(vec![3.0, 2.0, 1.0]);
        assert_ne!(schwefel_1_2(&forward), schwefel_1_2(&backward));

        let flat = Array1::from_vec(vec![2.0, 2.0, 2.0]);
        assert_eq!(schwefel_1_2(&flat), schwefel_1_2(&flat.slice(ndarray::s![..;-1]).to_owned()));
    }

    #[test]
    fn test_finite_over_grid_at_boundary_dimensions() {
        for d in [2usize, 50] {
            for step in 0..=20 {
                let v = -5.0 + 0.5 * step as f64;
                // alternate signs so neighbouring coordinates differ
                let x = Array1::from_shape_fn(d, |i| if i % 2 == 0 { v } else { -v * 0.9 });
                for name in get_function_metadata().keys() {
                    let value = call_function(name, &x).unwrap();
                    assert!(value.is_finite(), "{} at D={} v={} gave {}", name, d, v, value);
                }
            }
        }
    }

    #[test]
    fn test_function_metadata_completeness() {
        let metadata = get_function_metadata();

        for (name, meta) in metadata.iter() {
            assert_eq!(&meta.name, name);
            assert!(!meta.bounds.is_empty(), "Function {} has no bounds", name);
            assert!(!meta.description.is_empty(), "Function {} has no description", name);
            for (lower, upper) in &meta.bounds {
                assert!(lower < upper, "Function {} has invalid bounds", name);
            }
        }

        let json = serde_json::to_string(&metadata["ackley"]).unwrap();
        let back: FunctionMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bounds, vec![(-32.0, 32.0); 2]);
    }

    #[test]
    fn test_bounds_helpers() {
        assert_eq!(get_function_bounds_vec("griewank", 3, (-1.0, 1.0)), vec![(-600.0, 600.0); 3]);
        assert_eq!(get_function_bounds_vec("unknown", 2, (-1.0, 1.0)), vec![(-1.0, 1.0); 2]);
        let b = create_bounds(4, -5.0, 5.0);
        assert_eq!(b.shape(), &[2, 4]);
        assert_eq!(b[[0, 3]], -5.0);
        assert_eq!(b[[1, 0]], 5.0);
    }
}
