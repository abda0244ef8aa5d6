// ============================================================================
// Error Types
// ============================================================================

use cecbench_env::EnvError;
use std::path::PathBuf;

/// Errors raised while setting up or evaluating a benchmark problem
///
/// Setup errors (unknown id, unsupported dimension, missing or corrupt data,
/// shape mismatches, invalid values) are fatal for that setup. `DimensionMismatch` is the only
/// evaluation-time error and leaves the problem untouched.
#[derive(Debug, thiserror::Error)]
pub enum CecError {
    #[error("unknown problem id {0} (expected 1..=25)")]
    UnknownProblem(u32),

    #[error("problem F{id} does not support dimension {dimension}")]
    UnsupportedDimension { id: u32, dimension: usize },

    #[error("missing parameter data for F{id} at D={dimension}: {what}")]
    MissingParameterData {
        id: u32,
        dimension: usize,
        what: String,
    },

    #[error("corrupt parameter data in {}: {reason}", path.display())]
    CorruptParameterData { path: PathBuf, reason: String },

    #[error("expected {expected} components, found {found}")]
    ComponentCountMismatch { expected: usize, found: usize },

    #[error("{what} has shape {found:?}, expected {expected:?}")]
    ParameterShape {
        what: String,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("{what} must be {requirement}, found {value}")]
    InvalidParameter {
        what: String,
        requirement: &'static str,
        value: f64,
    },

    #[error("query vector has length {found}, problem dimension is {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Env(#[from] EnvError),
}

pub type CecResult<T> = Result<T, CecError>;
