//! CEC 2005 real-parameter benchmark problems
//!
//! The 25 problems of the suite are shifted, rotated and stretched versions of
//! the basic functions in `cecbench-testfunctions`, alone or blended into
//! hybrid compositions. Every problem is described by a row of the
//! [`catalog`]; its numeric parameters (optima, rotation matrices, auxiliary
//! matrices) come from a [`ParameterStore`].
//!
//! # Example
//!
//! ```rust
//! use cecbench_cec2005::{Auxiliary, MemoryParameterStore, Problem};
//! use ndarray::{Array1, Array2};
//!
//! let mut store = MemoryParameterStore::new();
//! let shift = Array2::from_shape_vec((1, 2), vec![1.5, -2.0]).unwrap();
//! store.insert_raw(1, shift, None, Auxiliary::None).unwrap();
//!
//! let problem = Problem::setup(1, 2, &store).unwrap();
//! let at_optimum = problem.evaluate(&Array1::from_vec(vec![1.5, -2.0])).unwrap();
//! assert_eq!(at_optimum, -450.0);
//! ```

pub mod basic;
pub mod blend;
pub mod catalog;
pub mod component;
pub mod errors;
pub mod noise;
pub mod normalize;
pub mod parallel_eval;
pub mod params;
pub mod problem;
pub mod store;
pub mod transform;

pub use basic::BasicFunction;
pub use blend::composite_weights;
pub use catalog::{ProblemSpec, SUPPORTED_DIMENSIONS, catalog, spec};
pub use component::{Component, Stretch};
pub use errors::{CecError, CecResult};
pub use noise::{GaussianNoise, NoNoise, NoiseSource};
pub use normalize::Normalization;
pub use parallel_eval::ParallelConfig;
pub use params::{Auxiliary, MemoryParameterStore, ParameterStore, ProblemParameters};
pub use problem::Problem;
pub use store::DirectoryParameterStore;
