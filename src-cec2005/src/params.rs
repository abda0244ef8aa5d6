//! Numeric parameters of a problem instance and the stores that supply them

use crate::catalog::{self, COMPOSITE_BIAS_STEP, COMPOSITE_OUTPUT_SCALE, Landscape, ProblemSpec};
use crate::errors::{CecError, CecResult};
use ndarray::Array2;
use std::collections::HashMap;

/// Extra matrices used by the two problems that are not component based
#[derive(Debug, Clone, PartialEq)]
pub enum Auxiliary {
    None,
    /// D x D matrix A of Schwefel's problem 2.6
    Schwefel26 { a: Array2<f64> },
    /// D x D matrices a and b of Schwefel's problem 2.13; the optimum alpha is the shift
    Schwefel213 { a: Array2<f64>, b: Array2<f64> },
}

/// Everything a problem needs besides its catalog row
///
/// Rotation matrices are stored in the engine convention: the rotated vector
/// is `M . z` (column vector on the right).
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemParameters {
    /// K x D, one row per component optimum
    pub shifts: Array2<f64>,
    /// One D x D matrix per component, `None` when the problem is not rotated
    pub rotations: Option<Vec<Array2<f64>>>,
    pub stretch: Vec<f64>,
    /// Basin width sigma per component
    pub width: Vec<f64>,
    pub component_bias: Vec<f64>,
    pub output_scale: Vec<f64>,
    pub global_bias: f64,
    pub auxiliary: Auxiliary,
}

impl ProblemParameters {
    /// Combine raw vectors/matrices with the catalog constants of `spec`
    ///
    /// Shift edits are applied here, so the result describes the final
    /// problem. Single-component problems carry their bias on the component
    /// and a zero global bias.
    pub fn from_catalog(
        spec: &ProblemSpec,
        mut shifts: Array2<f64>,
        rotations: Option<Vec<Array2<f64>>>,
        auxiliary: Auxiliary,
    ) -> Self {
        catalog::apply_shift_edits(spec.shift_edits, &mut shifts);
        match spec.landscape {
            Landscape::Composite { width, stretch, .. } => ProblemParameters {
                shifts,
                rotations,
                stretch: stretch.to_vec(),
                width: width.to_vec(),
                component_bias: (0..width.len())
                    .map(|k| COMPOSITE_BIAS_STEP * k as f64)
                    .collect(),
                output_scale: vec![COMPOSITE_OUTPUT_SCALE; width.len()],
                global_bias: spec.bias,
                auxiliary,
            },
            _ => ProblemParameters {
                shifts,
                rotations,
                stretch: vec![1.0],
                width: vec![1.0],
                component_bias: vec![spec.bias],
                output_scale: vec![1.0],
                global_bias: 0.0,
                auxiliary,
            },
        }
    }

    pub fn component_count(&self) -> usize {
        self.shifts.nrows()
    }

    pub fn dimension(&self) -> usize {
        self.shifts.ncols()
    }
}

/// Source of problem parameters
///
/// Stores are only read during setup; the assembled problem owns its data.
pub trait ParameterStore {
    fn load(&self, id: u32, dimension: usize) -> CecResult<ProblemParameters>;
}

/// In-memory store keyed by (problem id, dimension)
#[derive(Debug, Clone, Default)]
pub struct MemoryParameterStore {
    entries: HashMap<(u32, usize), ProblemParameters>,
}

impl MemoryParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: u32, dimension: usize, params: ProblemParameters) {
        self.entries.insert((id, dimension), params);
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, id: u32, dimension: usize, params: ProblemParameters) -> Self {
        self.insert(id, dimension, params);
        self
    }

    /// Insert raw data for a catalog problem, filling the constants from its row
    pub fn insert_raw(
        &mut self,
        id: u32,
        shifts: Array2<f64>,
        rotations: Option<Vec<Array2<f64>>>,
        auxiliary: Auxiliary,
    ) -> CecResult<()> {
        let spec = catalog::spec(id)?;
        let dimension = shifts.ncols();
        let params = ProblemParameters::from_catalog(spec, shifts, rotations, auxiliary);
        self.insert(id, dimension, params);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ParameterStore for MemoryParameterStore {
    fn load(&self, id: u32, dimension: usize) -> CecResult<ProblemParameters> {
        self.entries
            .get(&(id, dimension))
            .cloned()
            .ok_or_else(|| CecError::MissingParameterData {
                id,
                dimension,
                what: "no entry in memory store".to_string(),
            })
    }
}
