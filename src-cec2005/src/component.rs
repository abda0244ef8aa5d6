//! One basic function placed in the search space

use crate::basic::BasicFunction;
use crate::transform;
use ndarray::{Array1, Array2};

/// Stretch applied to the shifted (and rotated) input
#[derive(Debug, Clone, PartialEq)]
pub enum Stretch {
    /// Divide every coordinate by the same lambda
    Uniform(f64),
    /// Divide coordinate i of the rotated vector by `lambda[i]`
    PerAxis(Array1<f64>),
}

impl Stretch {
    pub fn is_identity(&self) -> bool {
        match self {
            Stretch::Uniform(l) => *l == 1.0,
            Stretch::PerAxis(l) => l.iter().all(|&v| v == 1.0),
        }
    }
}

/// A basic function with its own shift, rotation, stretch and bias
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub function: BasicFunction,
    /// Optimum of the component (o_k)
    pub shift: Array1<f64>,
    /// D x D, applied as `M . z`
    pub rotation: Option<Array2<f64>>,
    pub stretch: Stretch,
    /// Constant added after the shift, so `f(offset)` is the minimum of `function`
    pub optimum_offset: f64,
    /// Basin width sigma_k
    pub width: f64,
    pub bias: f64,
    pub output_scale: f64,
}

impl Component {
    /// Plain component: unrotated, unstretched, unit width, no bias
    pub fn new(function: BasicFunction, shift: Array1<f64>) -> Self {
        Self {
            function,
            shift,
            rotation: None,
            stretch: Stretch::Uniform(1.0),
            optimum_offset: 0.0,
            width: 1.0,
            bias: 0.0,
            output_scale: 1.0,
        }
    }

    pub fn with_rotation(mut self, rotation: Array2<f64>) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_stretch(mut self, stretch: Stretch) -> Self {
        self.stretch = stretch;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    pub fn with_output_scale(mut self, output_scale: f64) -> Self {
        self.output_scale = output_scale;
        self
    }

    pub fn with_optimum_offset(mut self, offset: f64) -> Self {
        self.optimum_offset = offset;
        self
    }

    pub fn dimension(&self) -> usize {
        self.shift.len()
    }

    /// Raw fitness of the basic function at the transformed `x`
    pub fn raw_fitness(&self, x: &Array1<f64>) -> f64 {
        self.function.eval(&transform::transform(x, self))
    }

    /// Squared distance between `x` and the component optimum
    pub fn distance_squared(&self, x: &Array1<f64>) -> f64 {
        x.iter()
            .zip(self.shift.iter())
            .map(|(xi, oi)| (xi - oi) * (xi - oi))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_raw_fitness_zero_at_optimum() {
        let c = Component::new(BasicFunction::Rastrigin, array![1.5, -2.0, 0.25])
            .with_stretch(Stretch::Uniform(0.5))
            .with_rotation(array![[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(c.raw_fitness(&array![1.5, -2.0, 0.25]), 0.0);
        assert!(c.raw_fitness(&array![1.0, -2.0, 0.25]) > 0.0);
    }

    #[test]
    fn test_distance_squared() {
        let c = Component::new(BasicFunction::Sphere, array![1.0, 2.0]);
        assert_eq!(c.distance_squared(&array![4.0, 6.0]), 25.0);
    }

    #[test]
    fn test_stretch_identity() {
        assert!(Stretch::Uniform(1.0).is_identity());
        assert!(!Stretch::Uniform(0.5).is_identity());
        assert!(!Stretch::PerAxis(array![1.0, 2.0]).is_identity());
    }
}
