//! The 25 problems of the suite as data
//!
//! One [`ProblemSpec`] row per problem id describes which landscape it uses,
//! where its parameter files live, the constant tables (widths, stretches,
//! biases) and the documented post-processing (noise, shift edits, input
//! rounding). Setup and evaluation are generic over this table.

use crate::basic::BasicFunction;
use crate::errors::{CecError, CecResult};
use std::f64::consts::PI;

/// Dimensions for which parameter data is published
pub const SUPPORTED_DIMENSIONS: [usize; 4] = [2, 10, 30, 50];

/// Components blended by every hybrid composition problem
pub const COMPOSITE_COMPONENTS: usize = 10;

/// Output scale C applied to each normalized composite component
pub const COMPOSITE_OUTPUT_SCALE: f64 = 2000.0;

/// Component k of a composition carries a bias of `k * COMPOSITE_BIAS_STEP`
pub const COMPOSITE_BIAS_STEP: f64 = 100.0;

#[derive(Debug, Clone, Copy)]
pub enum Landscape {
    /// One transformed basic function
    Single { function: BasicFunction },
    /// max_i |A_i x - B_i| with B = A o
    Schwefel26,
    /// sum_i (A_i - B_i(x))^2 with A = B(alpha)
    Schwefel213,
    /// Weighted blend of ten transformed basic functions
    Composite {
        functions: &'static [BasicFunction; COMPOSITE_COMPONENTS],
        width: &'static [f64; COMPOSITE_COMPONENTS],
        stretch: &'static [f64; COMPOSITE_COMPONENTS],
    },
}

/// Edits applied to the loaded shift vectors before the components are built
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShiftEdit {
    /// First ceil(D/4) coordinates of component 0 to -100, coordinates from floor(3D/4)-1 on to +100
    BoundQuarters,
    /// Coordinates 0, 2, .., 2(floor(D/2)-1) of component 0 set to the value
    EvenCoordinates(f64),
    /// Coordinates 1, 3, .., 2 floor(D/2)-1 of component 0 set to the value
    OddCoordinates(f64),
    /// The last component is centred on the origin
    ZeroLastComponent,
}

/// Multiplicative fitness noise, (1 + scale |N(0,1)|)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Noise {
    None,
    /// Applied to the objective before the bias is added
    Objective(f64),
    /// Applied to the raw fitness of one composite component
    Component { index: usize, scale: f64 },
}

/// Where a problem's rotation matrices are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationSource {
    pub folder: u32,
    pub stem: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ProblemSpec {
    pub id: u32,
    pub name: &'static str,
    pub landscape: Landscape,
    /// Bias of the single component (simple problems) or global bias (compositions)
    pub bias: f64,
    /// Folder of the shift file (or of the auxiliary data file)
    pub shift_folder: u32,
    pub rotation: Option<RotationSource>,
    pub shift_edits: &'static [ShiftEdit],
    /// Added after the shift step so the optimum sits on the shift vector
    pub optimum_offset: f64,
    pub noise: Noise,
    /// Snap x_j to round(2 x_j)/2 when |x_j - o_1j| >= 1/2 before evaluating
    pub non_continuous_input: bool,
    /// Search (or initialization) range per coordinate
    pub bounds: (f64, f64),
    pub has_bounds: bool,
}

impl ProblemSpec {
    pub fn component_count(&self) -> usize {
        match self.landscape {
            Landscape::Composite { .. } => COMPOSITE_COMPONENTS,
            _ => 1,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.landscape, Landscape::Composite { .. })
    }

    pub fn is_noisy(&self) -> bool {
        self.noise != Noise::None
    }

    pub fn supports_dimension(&self, dimension: usize) -> bool {
        SUPPORTED_DIMENSIONS.contains(&dimension)
    }
}

use BasicFunction::*;

static HYBRID_1: [BasicFunction; COMPOSITE_COMPONENTS] = [
    Rastrigin,
    Rastrigin,
    Weierstrass,
    Weierstrass,
    Griewank,
    Griewank,
    Ackley,
    Ackley,
    Sphere,
    Sphere,
];
static HYBRID_1_WIDTH: [f64; COMPOSITE_COMPONENTS] = [1.0; COMPOSITE_COMPONENTS];
static HYBRID_1_STRETCH: [f64; COMPOSITE_COMPONENTS] = [
    1.0,
    1.0,
    10.0,
    10.0,
    5.0 / 60.0,
    5.0 / 60.0,
    5.0 / 32.0,
    5.0 / 32.0,
    5.0 / 100.0,
    5.0 / 100.0,
];

static HYBRID_2: [BasicFunction; COMPOSITE_COMPONENTS] = [
    Ackley,
    Ackley,
    Rastrigin,
    Rastrigin,
    Sphere,
    Sphere,
    Weierstrass,
    Weierstrass,
    Griewank,
    Griewank,
];
static HYBRID_2_WIDTH: [f64; COMPOSITE_COMPONENTS] =
    [1.0, 2.0, 1.5, 1.5, 1.0, 1.0, 1.5, 1.5, 2.0, 2.0];
static HYBRID_2_STRETCH: [f64; COMPOSITE_COMPONENTS] = [
    5.0 / 16.0,
    5.0 / 32.0,
    2.0,
    1.0,
    1.0 / 10.0,
    1.0 / 20.0,
    20.0,
    10.0,
    1.0 / 6.0,
    1.0 / 12.0,
];
// narrow basin around the first optimum
static HYBRID_2_NARROW_WIDTH: [f64; COMPOSITE_COMPONENTS] =
    [0.1, 2.0, 1.5, 1.5, 1.0, 1.0, 1.5, 1.5, 2.0, 2.0];
static HYBRID_2_NARROW_STRETCH: [f64; COMPOSITE_COMPONENTS] = [
    0.5 / 32.0,
    5.0 / 32.0,
    2.0,
    1.0,
    1.0 / 10.0,
    1.0 / 20.0,
    20.0,
    10.0,
    1.0 / 6.0,
    1.0 / 12.0,
];

static HYBRID_3: [BasicFunction; COMPOSITE_COMPONENTS] = [
    ExpandedSchafferF6,
    ExpandedSchafferF6,
    Rastrigin,
    Rastrigin,
    ExpandedGriewankRosenbrock,
    ExpandedGriewankRosenbrock,
    Weierstrass,
    Weierstrass,
    Griewank,
    Griewank,
];
static HYBRID_3_WIDTH: [f64; COMPOSITE_COMPONENTS] =
    [1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 2.0];
static HYBRID_3_STRETCH: [f64; COMPOSITE_COMPONENTS] = [
    1.0 / 4.0,
    1.0 / 20.0,
    5.0,
    1.0,
    5.0,
    1.0,
    50.0,
    10.0,
    1.0 / 8.0,
    1.0 / 40.0,
];

static HYBRID_4: [BasicFunction; COMPOSITE_COMPONENTS] = [
    Weierstrass,
    ExpandedSchafferF6,
    ExpandedGriewankRosenbrock,
    Ackley,
    Rastrigin,
    Griewank,
    NonContinuousExpandedSchafferF6,
    NonContinuousRastrigin,
    Elliptic,
    Sphere,
];
static HYBRID_4_WIDTH: [f64; COMPOSITE_COMPONENTS] = [2.0; COMPOSITE_COMPONENTS];
static HYBRID_4_STRETCH: [f64; COMPOSITE_COMPONENTS] = [
    10.0,
    1.0 / 4.0,
    1.0,
    5.0 / 32.0,
    1.0,
    1.0 / 20.0,
    1.0 / 10.0,
    1.0,
    1.0 / 20.0,
    1.0 / 20.0,
];

const fn single(function: BasicFunction) -> Landscape {
    Landscape::Single { function }
}

const fn rot(folder: u32) -> Option<RotationSource> {
    Some(RotationSource { folder, stem: "rot" })
}

static CATALOG: [ProblemSpec; 25] = [
    ProblemSpec {
        id: 1,
        name: "Shifted Sphere Function",
        landscape: single(Sphere),
        bias: -450.0,
        shift_folder: 1,
        rotation: None,
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-100.0, 100.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 2,
        name: "Shifted Schwefel's Problem 1.2",
        landscape: single(SchwefelOneTwo),
        bias: -450.0,
        shift_folder: 2,
        rotation: None,
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-100.0, 100.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 3,
        name: "Shifted Rotated High Conditioned Elliptic Function",
        landscape: single(Elliptic),
        bias: -450.0,
        shift_folder: 3,
        rotation: rot(3),
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-100.0, 100.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 4,
        name: "Shifted Schwefel's Problem 1.2 with Noise in Fitness",
        landscape: single(SchwefelOneTwo),
        bias: -450.0,
        shift_folder: 2,
        rotation: None,
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::Objective(0.4),
        non_continuous_input: false,
        bounds: (-100.0, 100.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 5,
        name: "Schwefel's Problem 2.6 with Global Optimum on Bounds",
        landscape: Landscape::Schwefel26,
        bias: -310.0,
        shift_folder: 5,
        rotation: None,
        shift_edits: &[ShiftEdit::BoundQuarters],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-100.0, 100.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 6,
        name: "Shifted Rosenbrock's Function",
        landscape: single(Rosenbrock),
        bias: 390.0,
        shift_folder: 6,
        rotation: None,
        shift_edits: &[],
        optimum_offset: 1.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-100.0, 100.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 7,
        name: "Shifted Rotated Griewank's Function without Bounds",
        landscape: single(Griewank),
        bias: -180.0,
        shift_folder: 7,
        rotation: rot(7),
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (0.0, 600.0),
        has_bounds: false,
    },
    ProblemSpec {
        id: 8,
        name: "Shifted Rotated Ackley's Function with Global Optimum on Bounds",
        landscape: single(Ackley),
        bias: -140.0,
        shift_folder: 8,
        rotation: rot(8),
        shift_edits: &[ShiftEdit::EvenCoordinates(-32.0)],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-32.0, 32.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 9,
        name: "Shifted Rastrigin's Function",
        landscape: single(Rastrigin),
        bias: -330.0,
        shift_folder: 9,
        rotation: None,
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-5.0, 5.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 10,
        name: "Shifted Rotated Rastrigin's Function",
        landscape: single(Rastrigin),
        bias: -330.0,
        shift_folder: 9,
        rotation: rot(10),
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-5.0, 5.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 11,
        name: "Shifted Rotated Weierstrass Function",
        landscape: single(Weierstrass),
        bias: 90.0,
        shift_folder: 11,
        rotation: rot(11),
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-0.5, 0.5),
        has_bounds: true,
    },
    ProblemSpec {
        id: 12,
        name: "Schwefel's Problem 2.13",
        landscape: Landscape::Schwefel213,
        bias: -460.0,
        shift_folder: 12,
        rotation: None,
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-PI, PI),
        has_bounds: true,
    },
    ProblemSpec {
        id: 13,
        name: "Shifted Expanded Griewank's plus Rosenbrock's Function (F8F2)",
        landscape: single(ExpandedGriewankRosenbrock),
        bias: -130.0,
        shift_folder: 13,
        rotation: None,
        shift_edits: &[],
        optimum_offset: 1.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-3.0, 1.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 14,
        name: "Shifted Rotated Expanded Scaffer's F6",
        landscape: single(ExpandedSchafferF6),
        bias: -300.0,
        shift_folder: 14,
        rotation: rot(14),
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-100.0, 100.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 15,
        name: "Hybrid Composition Function",
        landscape: Landscape::Composite {
            functions: &HYBRID_1,
            width: &HYBRID_1_WIDTH,
            stretch: &HYBRID_1_STRETCH,
        },
        bias: 120.0,
        shift_folder: 15,
        rotation: None,
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-5.0, 5.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 16,
        name: "Rotated Hybrid Composition Function",
        landscape: Landscape::Composite {
            functions: &HYBRID_1,
            width: &HYBRID_1_WIDTH,
            stretch: &HYBRID_1_STRETCH,
        },
        bias: 120.0,
        shift_folder: 15,
        rotation: rot(16),
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-5.0, 5.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 17,
        name: "Rotated Hybrid Composition Function with Noise in Fitness",
        landscape: Landscape::Composite {
            functions: &HYBRID_1,
            width: &HYBRID_1_WIDTH,
            stretch: &HYBRID_1_STRETCH,
        },
        bias: 120.0,
        shift_folder: 15,
        rotation: rot(16),
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::Objective(0.2),
        non_continuous_input: false,
        bounds: (-5.0, 5.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 18,
        name: "Rotated Hybrid Composition Function",
        landscape: Landscape::Composite {
            functions: &HYBRID_2,
            width: &HYBRID_2_WIDTH,
            stretch: &HYBRID_2_STRETCH,
        },
        bias: 10.0,
        shift_folder: 18,
        rotation: rot(18),
        shift_edits: &[ShiftEdit::ZeroLastComponent],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-5.0, 5.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 19,
        name: "Rotated Hybrid Composition Function with a Narrow Basin for the Global Optimum",
        landscape: Landscape::Composite {
            functions: &HYBRID_2,
            width: &HYBRID_2_NARROW_WIDTH,
            stretch: &HYBRID_2_NARROW_STRETCH,
        },
        bias: 10.0,
        shift_folder: 18,
        rotation: rot(18),
        shift_edits: &[ShiftEdit::ZeroLastComponent],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-5.0, 5.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 20,
        name: "Rotated Hybrid Composition Function with the Global Optimum on the Bounds",
        landscape: Landscape::Composite {
            functions: &HYBRID_2,
            width: &HYBRID_2_WIDTH,
            stretch: &HYBRID_2_STRETCH,
        },
        bias: 10.0,
        shift_folder: 18,
        rotation: rot(18),
        shift_edits: &[ShiftEdit::OddCoordinates(5.0), ShiftEdit::ZeroLastComponent],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-5.0, 5.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 21,
        name: "Rotated Hybrid Composition Function",
        landscape: Landscape::Composite {
            functions: &HYBRID_3,
            width: &HYBRID_3_WIDTH,
            stretch: &HYBRID_3_STRETCH,
        },
        bias: 360.0,
        shift_folder: 21,
        rotation: rot(21),
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-5.0, 5.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 22,
        name: "Rotated Hybrid Composition Function with High Condition Number Matrix",
        landscape: Landscape::Composite {
            functions: &HYBRID_3,
            width: &HYBRID_3_WIDTH,
            stretch: &HYBRID_3_STRETCH,
        },
        bias: 360.0,
        shift_folder: 21,
        rotation: Some(RotationSource {
            folder: 22,
            stem: "rot_sub",
        }),
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: false,
        bounds: (-5.0, 5.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 23,
        name: "Non-Continuous Rotated Hybrid Composition Function",
        landscape: Landscape::Composite {
            functions: &HYBRID_3,
            width: &HYBRID_3_WIDTH,
            stretch: &HYBRID_3_STRETCH,
        },
        bias: 360.0,
        shift_folder: 21,
        rotation: rot(21),
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::None,
        non_continuous_input: true,
        bounds: (-5.0, 5.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 24,
        name: "Rotated Hybrid Composition Function",
        landscape: Landscape::Composite {
            functions: &HYBRID_4,
            width: &HYBRID_4_WIDTH,
            stretch: &HYBRID_4_STRETCH,
        },
        bias: 260.0,
        shift_folder: 24,
        rotation: rot(24),
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::Component {
            index: 9,
            scale: 0.1,
        },
        non_continuous_input: false,
        bounds: (-5.0, 5.0),
        has_bounds: true,
    },
    ProblemSpec {
        id: 25,
        name: "Rotated Hybrid Composition Function without Bounds",
        landscape: Landscape::Composite {
            functions: &HYBRID_4,
            width: &HYBRID_4_WIDTH,
            stretch: &HYBRID_4_STRETCH,
        },
        bias: 260.0,
        shift_folder: 24,
        rotation: rot(24),
        shift_edits: &[],
        optimum_offset: 0.0,
        noise: Noise::Component {
            index: 9,
            scale: 0.1,
        },
        non_continuous_input: false,
        bounds: (2.0, 5.0),
        has_bounds: false,
    },
];

/// All problem rows, ordered by id
pub fn catalog() -> &'static [ProblemSpec] {
    &CATALOG
}

/// Row for one problem id
pub fn spec(id: u32) -> CecResult<&'static ProblemSpec> {
    CATALOG
        .iter()
        .find(|s| s.id == id)
        .ok_or(CecError::UnknownProblem(id))
}

/// Apply the catalog's shift edits to a K x D shift matrix
pub fn apply_shift_edits(edits: &[ShiftEdit], shifts: &mut ndarray::Array2<f64>) {
    let (k, d) = shifts.dim();
    if k == 0 {
        return;
    }
    for edit in edits {
        match *edit {
            ShiftEdit::BoundQuarters => {
                let lower = d.div_ceil(4);
                for i in 0..lower {
                    shifts[[0, i]] = -100.0;
                }
                let upper = ((3 * d) / 4).saturating_sub(1);
                for i in upper..d {
                    shifts[[0, i]] = 100.0;
                }
            }
            ShiftEdit::EvenCoordinates(v) => {
                for i in 0..d / 2 {
                    shifts[[0, 2 * i]] = v;
                }
            }
            ShiftEdit::OddCoordinates(v) => {
                for i in 0..d / 2 {
                    shifts[[0, 2 * i + 1]] = v;
                }
            }
            ShiftEdit::ZeroLastComponent => {
                shifts.row_mut(k - 1).fill(0.0);
            }
        }
    }
}
