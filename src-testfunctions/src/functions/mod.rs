//! Test function implementations organized by category
//!
//! This module contains the basic landscapes combined by the benchmark suite:
//! - `unimodal`: Single-optimum functions (sphere, elliptic, Schwefel 1.2/2.6, Rosenbrock)
//! - `multimodal`: Multi-optimum functions (Rastrigin, Weierstrass, Griewank, Ackley, Schwefel 2.13)
//! - `composite`: Expanded functions built from a two-variable kernel (Schaffer F6, F8F2)

pub mod composite;
pub mod multimodal;
pub mod unimodal;

// Re-export all functions for easy access
pub use composite::*;
pub use multimodal::*;
pub use unimodal::*;
