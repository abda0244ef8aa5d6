//! Identifiers for the basic landscapes a component can be assigned
//!
//! Dispatch is a plain `match` onto the functions of `cecbench-testfunctions`;
//! the catalog refers to functions only through this enum.

use cecbench_testfunctions as tf;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasicFunction {
    Sphere,
    SchwefelOneTwo,
    Elliptic,
    Rosenbrock,
    Rastrigin,
    NonContinuousRastrigin,
    Weierstrass,
    Griewank,
    Ackley,
    ExpandedSchafferF6,
    NonContinuousExpandedSchafferF6,
    ExpandedGriewankRosenbrock,
}

impl BasicFunction {
    /// Evaluate on an already transformed vector
    pub fn eval(self, z: &Array1<f64>) -> f64 {
        match self {
            BasicFunction::Sphere => tf::sphere(z),
            BasicFunction::SchwefelOneTwo => tf::schwefel_1_2(z),
            BasicFunction::Elliptic => tf::elliptic(z),
            BasicFunction::Rosenbrock => tf::rosenbrock(z),
            BasicFunction::Rastrigin => tf::rastrigin(z),
            BasicFunction::NonContinuousRastrigin => tf::non_continuous_rastrigin(z),
            BasicFunction::Weierstrass => tf::weierstrass(z),
            BasicFunction::Griewank => tf::griewank(z),
            BasicFunction::Ackley => tf::ackley(z),
            BasicFunction::ExpandedSchafferF6 => tf::expanded_schaffer_f6(z),
            BasicFunction::NonContinuousExpandedSchafferF6 => {
                tf::non_continuous_expanded_schaffer_f6(z)
            }
            BasicFunction::ExpandedGriewankRosenbrock => tf::expanded_griewank_rosenbrock(z),
        }
    }

    /// Key into [`cecbench_testfunctions::get_function_metadata`]
    pub fn name(self) -> &'static str {
        match self {
            BasicFunction::Sphere => "sphere",
            BasicFunction::SchwefelOneTwo => "schwefel_1_2",
            BasicFunction::Elliptic => "elliptic",
            BasicFunction::Rosenbrock => "rosenbrock",
            BasicFunction::Rastrigin => "rastrigin",
            BasicFunction::NonContinuousRastrigin => "non_continuous_rastrigin",
            BasicFunction::Weierstrass => "weierstrass",
            BasicFunction::Griewank => "griewank",
            BasicFunction::Ackley => "ackley",
            BasicFunction::ExpandedSchafferF6 => "expanded_schaffer_f6",
            BasicFunction::NonContinuousExpandedSchafferF6 => {
                "non_continuous_expanded_schaffer_f6"
            }
            BasicFunction::ExpandedGriewankRosenbrock => "expanded_griewank_rosenbrock",
        }
    }
}

impl fmt::Display for BasicFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
