//! Problem assembly and evaluation
//!
//! A [`Problem`] is built once from a catalog row and a [`ParameterStore`],
//! then evaluated any number of times. Evaluation takes `&self`, so a problem
//! can be shared between threads.

use crate::basic::BasicFunction;
use crate::blend::composite_weights;
use crate::catalog::{self, Landscape, Noise, ProblemSpec};
use crate::component::{Component, Stretch};
use crate::errors::{CecError, CecResult};
use crate::noise::{self, NoNoise, NoiseSource};
use crate::normalize::{self, Normalization};
use crate::parallel_eval::{self, ParallelConfig};
use crate::params::{Auxiliary, ParameterStore, ProblemParameters};
use cecbench_testfunctions as tf;
use ndarray::{Array1, Array2};

#[derive(Debug, Clone)]
enum Objective {
    Single,
    Schwefel26 {
        a: Array2<f64>,
        b: Array1<f64>,
        bias: f64,
    },
    Schwefel213 {
        a: Array2<f64>,
        b: Array2<f64>,
        target: Array1<f64>,
        bias: f64,
    },
    Composite,
}

/// One benchmark problem at a fixed dimension
#[derive(Debug, Clone)]
pub struct Problem {
    spec: &'static ProblemSpec,
    dimension: usize,
    components: Vec<Component>,
    normalization: Vec<Normalization>,
    global_bias: f64,
    optimum: Array1<f64>,
    objective: Objective,
}

impl Problem {
    /// Load the parameters of problem `id` at `dimension` and assemble it
    pub fn setup(id: u32, dimension: usize, store: &dyn ParameterStore) -> CecResult<Self> {
        let spec = catalog::spec(id)?;
        if !spec.supports_dimension(dimension) {
            return Err(CecError::UnsupportedDimension { id, dimension });
        }
        let params = store.load(id, dimension)?;
        Self::from_parameters(spec, dimension, params)
    }

    /// Assemble a problem from already loaded parameters
    pub fn from_parameters(
        spec: &'static ProblemSpec,
        dimension: usize,
        params: ProblemParameters,
    ) -> CecResult<Self> {
        validate(spec, dimension, &params)?;
        log::debug!(
            "F{} D={}: shifts {:?}, rotated: {}",
            spec.id,
            dimension,
            params.shifts.shape(),
            params.rotations.is_some()
        );

        let optimum = params.shifts.row(0).to_owned();
        let (components, objective) = match spec.landscape {
            Landscape::Single { function } => {
                (build_components(spec, &params, &[function]), Objective::Single)
            }
            Landscape::Composite { functions, .. } => {
                (build_components(spec, &params, functions), Objective::Composite)
            }
            Landscape::Schwefel26 => {
                let a = match &params.auxiliary {
                    Auxiliary::Schwefel26 { a } => a.clone(),
                    _ => return Err(missing(spec, dimension, "Schwefel 2.6 matrix A")),
                };
                let b = tf::schwefel_2_6_offsets(&a, &optimum);
                (
                    Vec::new(),
                    Objective::Schwefel26 {
                        a,
                        b,
                        bias: params.component_bias[0],
                    },
                )
            }
            Landscape::Schwefel213 => {
                let (a, b) = match &params.auxiliary {
                    Auxiliary::Schwefel213 { a, b } => (a.clone(), b.clone()),
                    _ => return Err(missing(spec, dimension, "Schwefel 2.13 matrices a, b")),
                };
                let target = tf::schwefel_2_13_terms(&a, &b, &optimum);
                (
                    Vec::new(),
                    Objective::Schwefel213 {
                        a,
                        b,
                        target,
                        bias: params.component_bias[0],
                    },
                )
            }
        };

        let normalization = if spec.is_composite() {
            let n = normalize::normalizations(&components);
            for (k, (c, norm)) in components.iter().zip(n.iter()).enumerate() {
                log::debug!("F{} component {} ({}): norm {:e}", spec.id, k, c.function, norm.value);
            }
            n
        } else {
            Vec::new()
        };

        Ok(Self {
            spec,
            dimension,
            components,
            normalization,
            global_bias: params.global_bias,
            optimum,
            objective,
        })
    }

    /// Noise-free objective value at `x`
    ///
    /// For the noisy problems this is the value with every deviate equal to 0.
    pub fn evaluate(&self, x: &Array1<f64>) -> CecResult<f64> {
        self.evaluate_noisy(x, &mut NoNoise)
    }

    /// Objective value at `x` with the problem's fitness noise drawn from `noise`
    pub fn evaluate_noisy(&self, x: &Array1<f64>, noise: &mut dyn NoiseSource) -> CecResult<f64> {
        if x.len() != self.dimension {
            return Err(CecError::DimensionMismatch {
                expected: self.dimension,
                found: x.len(),
            });
        }
        let value = match &self.objective {
            Objective::Single => {
                let c = &self.components[0];
                let mut f = c.raw_fitness(x);
                if let Noise::Objective(scale) = self.spec.noise {
                    f *= noise::factor(scale, noise);
                }
                f + c.bias + self.global_bias
            }
            Objective::Schwefel26 { a, b, bias } => tf::schwefel_2_6(x, a, b) + bias,
            Objective::Schwefel213 { a, b, target, bias } => {
                tf::schwefel_2_13(x, a, b, target) + bias
            }
            Objective::Composite => self.evaluate_composite(x, noise),
        };
        Ok(value)
    }

    fn evaluate_composite(&self, x: &Array1<f64>, noise: &mut dyn NoiseSource) -> f64 {
        let snapped;
        let x = if self.spec.non_continuous_input {
            snapped = snap_far_coordinates(x, &self.optimum);
            &snapped
        } else {
            x
        };

        let weights = composite_weights(&self.components, x);
        let mut total = 0.0;
        for (k, c) in self.components.iter().enumerate() {
            let w = weights[k];
            if w == 0.0 {
                continue;
            }
            let mut raw = c.raw_fitness(x);
            if let Noise::Component { index, scale } = self.spec.noise {
                if index == k {
                    raw *= noise::factor(scale, noise);
                }
            }
            let fit = raw * (c.output_scale / self.normalization[k].value);
            total += w * (fit + c.bias);
        }
        if let Noise::Objective(scale) = self.spec.noise {
            total *= noise::factor(scale, noise);
        }
        total + self.global_bias
    }

    /// Evaluate every row of `population` (noise-free)
    pub fn evaluate_population(
        &self,
        population: &Array2<f64>,
        config: &ParallelConfig,
    ) -> CecResult<Array1<f64>> {
        if population.ncols() != self.dimension {
            return Err(CecError::DimensionMismatch {
                expected: self.dimension,
                found: population.ncols(),
            });
        }
        let values = parallel_eval::evaluate_rows(
            population,
            |_, row| self.evaluate(&row.to_owned()),
            config,
        )?;
        Ok(Array1::from_vec(values))
    }

    pub fn id(&self) -> u32 {
        self.spec.id
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn spec(&self) -> &'static ProblemSpec {
        self.spec
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Components in blend order; empty for the Schwefel 2.6 and 2.13 problems
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Normalization constants, one per component of a composition
    pub fn normalization(&self) -> &[Normalization] {
        &self.normalization
    }

    pub fn global_bias(&self) -> f64 {
        self.global_bias
    }

    /// Location of the global optimum
    pub fn optimum(&self) -> &Array1<f64> {
        &self.optimum
    }

    /// Objective value at the global optimum
    pub fn optimum_value(&self) -> f64 {
        match &self.objective {
            Objective::Schwefel26 { bias, .. } | Objective::Schwefel213 { bias, .. } => *bias,
            Objective::Single => self.components[0].bias + self.global_bias,
            Objective::Composite => self.components[0].bias + self.global_bias,
        }
    }

    /// Search range (or initialization range for unbounded problems) as a 2 x D matrix
    pub fn bounds(&self) -> Array2<f64> {
        let (lower, upper) = self.spec.bounds;
        tf::create_bounds(self.dimension, lower, upper)
    }

    pub fn has_bounds(&self) -> bool {
        self.spec.has_bounds
    }

    pub fn is_noisy(&self) -> bool {
        self.spec.is_noisy()
    }
}

fn missing(spec: &ProblemSpec, dimension: usize, what: &str) -> CecError {
    CecError::MissingParameterData {
        id: spec.id,
        dimension,
        what: what.to_string(),
    }
}

fn shape_error(what: &str, expected: Vec<usize>, found: &[usize]) -> CecError {
    CecError::ParameterShape {
        what: what.to_string(),
        expected,
        found: found.to_vec(),
    }
}

fn validate(spec: &ProblemSpec, dimension: usize, params: &ProblemParameters) -> CecResult<()> {
    let k = spec.component_count();
    if params.component_count() != k {
        return Err(CecError::ComponentCountMismatch {
            expected: k,
            found: params.component_count(),
        });
    }
    if params.dimension() != dimension {
        return Err(shape_error("shift matrix", vec![k, dimension], params.shifts.shape()));
    }
    for (what, len) in [
        ("stretch", params.stretch.len()),
        ("width", params.width.len()),
        ("component bias", params.component_bias.len()),
        ("output scale", params.output_scale.len()),
    ] {
        if len != k {
            return Err(shape_error(what, vec![k], &[len]));
        }
    }
    match &params.rotations {
        Some(rotations) => {
            if rotations.len() != k {
                return Err(CecError::ComponentCountMismatch {
                    expected: k,
                    found: rotations.len(),
                });
            }
            for m in rotations {
                if m.shape() != [dimension, dimension] {
                    return Err(shape_error("rotation matrix", vec![dimension, dimension], m.shape()));
                }
            }
        }
        None if spec.rotation.is_some() => {
            return Err(missing(spec, dimension, "rotation matrices"));
        }
        None => {}
    }
    match &params.auxiliary {
        Auxiliary::None => {}
        Auxiliary::Schwefel26 { a } => {
            if a.shape() != [dimension, dimension] {
                return Err(shape_error("matrix A", vec![dimension, dimension], a.shape()));
            }
        }
        Auxiliary::Schwefel213 { a, b } => {
            for (what, m) in [("matrix a", a), ("matrix b", b)] {
                if m.shape() != [dimension, dimension] {
                    return Err(shape_error(what, vec![dimension, dimension], m.shape()));
                }
            }
        }
    }
    validate_values(params)
}

fn invalid(what: &str, requirement: &'static str, value: f64) -> CecError {
    CecError::InvalidParameter {
        what: what.to_string(),
        requirement,
        value,
    }
}

fn check_finite<'a>(what: &str, values: impl IntoIterator<Item = &'a f64>) -> CecResult<()> {
    match values.into_iter().find(|v| !v.is_finite()) {
        Some(&v) => Err(invalid(what, "finite", v)),
        None => Ok(()),
    }
}

/// Widths and stretches must be finite and positive, everything else finite
fn validate_values(params: &ProblemParameters) -> CecResult<()> {
    for (what, values) in [("width", &params.width), ("stretch", &params.stretch)] {
        if let Some(&v) = values.iter().find(|v| !(v.is_finite() && **v > 0.0)) {
            return Err(invalid(what, "finite and positive", v));
        }
    }
    check_finite("shift matrix", params.shifts.iter())?;
    check_finite("component bias", params.component_bias.iter())?;
    check_finite("output scale", params.output_scale.iter())?;
    check_finite("global bias", [params.global_bias].iter())?;
    if let Some(rotations) = &params.rotations {
        for m in rotations {
            check_finite("rotation matrix", m.iter())?;
        }
    }
    match &params.auxiliary {
        Auxiliary::None => Ok(()),
        Auxiliary::Schwefel26 { a } => check_finite("matrix A", a.iter()),
        Auxiliary::Schwefel213 { a, b } => {
            check_finite("matrix a", a.iter())?;
            check_finite("matrix b", b.iter())
        }
    }
}

fn build_components(
    spec: &ProblemSpec,
    params: &ProblemParameters,
    functions: &[BasicFunction],
) -> Vec<Component> {
    functions
        .iter()
        .enumerate()
        .map(|(k, &function)| Component {
            function,
            shift: params.shifts.row(k).to_owned(),
            rotation: params.rotations.as_ref().map(|r| r[k].clone()),
            stretch: Stretch::Uniform(params.stretch[k]),
            optimum_offset: spec.optimum_offset,
            width: params.width[k],
            bias: params.component_bias[k],
            output_scale: params.output_scale[k],
        })
        .collect()
}

/// Snap coordinates at least 1/2 away from `center` to the half-integer grid
fn snap_far_coordinates(x: &Array1<f64>, center: &Array1<f64>) -> Array1<f64> {
    x.iter()
        .zip(center.iter())
        .map(|(&xi, &oi)| {
            if (xi - oi).abs() < 0.5 {
                xi
            } else {
                (2.0 * xi).round() / 2.0
            }
        })
        .collect()
}
