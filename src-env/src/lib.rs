//! Environment helpers shared by the cecbench crates
//!
//! The benchmark parameter files (shift vectors, rotation matrices, auxiliary
//! matrices) live outside the source tree. This crate resolves where they are.

pub mod constants;
pub mod env_utils;

pub use env_utils::{EnvError, get_data_dir, get_input_data_dir, input_data_dir, problem_data_dir};
