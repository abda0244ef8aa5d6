//! Shared fixtures for the problem integration tests
//!
//! Parameter data is synthetic: distinct optima spread over the search box and
//! plane rotations, small enough to reason about by hand.

#![allow(dead_code)]

use cecbench_cec2005::{Auxiliary, MemoryParameterStore};
use ndarray::{Array1, Array2};
use std::fs;
use std::path::Path;

/// Route `log` records to the test output
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Orthonormal rotation by `theta` in the (0, 1) plane, identity elsewhere
pub fn plane_rotation(dimension: usize, theta: f64) -> Array2<f64> {
    let mut m = Array2::eye(dimension);
    let (s, c) = theta.sin_cos();
    m[[0, 0]] = c;
    m[[0, 1]] = -s;
    m[[1, 0]] = s;
    m[[1, 1]] = c;
    m
}

/// K distinct optima inside [-4, 4]^D
pub fn spread_shifts(k: usize, dimension: usize) -> Array2<f64> {
    Array2::from_shape_fn((k, dimension), |(c, j)| {
        let v = -4.0 + 0.8 * c as f64 + 0.1 * j as f64;
        if j % 2 == 0 { v } else { -v * 0.5 }
    })
}

/// One rotation per component, each by a different angle
pub fn rotations(k: usize, dimension: usize) -> Vec<Array2<f64>> {
    (0..k)
        .map(|c| plane_rotation(dimension, 0.3 + 0.25 * c as f64))
        .collect()
}

/// Store with synthetic data for every problem at `dimension`
pub fn full_store(dimension: usize) -> MemoryParameterStore {
    let mut store = MemoryParameterStore::new();
    for spec in cecbench_cec2005::catalog() {
        let k = spec.component_count();
        let shifts = spread_shifts(k, dimension);
        let rots = spec.rotation.map(|_| rotations(k, dimension));
        let auxiliary = match spec.id {
            5 => Auxiliary::Schwefel26 {
                a: integer_matrix(dimension, 7),
            },
            12 => Auxiliary::Schwefel213 {
                a: integer_matrix(dimension, 3),
                b: integer_matrix(dimension, 5),
            },
            _ => Auxiliary::None,
        };
        let shifts = if spec.id == 12 {
            // alpha inside [-pi, pi]
            shifts.mapv(|v| v * 0.5)
        } else {
            shifts
        };
        store
            .insert_raw(spec.id, shifts, rots, auxiliary)
            .expect("catalog id");
    }
    store
}

/// Deterministic D x D matrix with entries in [-50, 50]
pub fn integer_matrix(dimension: usize, seed: i64) -> Array2<f64> {
    Array2::from_shape_fn((dimension, dimension), |(i, j)| {
        (((i as i64 * 31 + j as i64 * 17 + seed * 13) % 101) - 50) as f64
    })
}

pub fn point(values: &[f64]) -> Array1<f64> {
    Array1::from_vec(values.to_vec())
}

/// Write whitespace separated rows to `path`, creating parent directories
pub fn write_rows(path: &Path, rows: &[Vec<f64>]) {
    fs::create_dir_all(path.parent().expect("parent dir")).expect("create dir");
    let text: String = rows
        .iter()
        .map(|r| {
            let line: Vec<String> = r.iter().map(|v| format!("{:.17e}", v)).collect();
            line.join(" ") + "\n"
        })
        .collect();
    fs::write(path, text).expect("write rows");
}
