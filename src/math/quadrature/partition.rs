use nalgebra::DVector;

use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::samplingmode::SamplingMode;

/// Uniform partition of [x_min, x_max] into n_rect equal segments. The bounds
/// may be given in either order; a reversed pair makes every segment width
/// negative and the resulting integral signed.
pub struct UniformPartition {
    x_min: f64,
    x_max: f64,
    n_rect: usize
}

impl UniformPartition {
    pub fn new(x_min: f64, x_max: f64, n_rect: usize) -> Result<UniformPartition, QuadratureError> {
        if n_rect == 0 {
            Err(QuadratureError::ZeroRectangleCount)
        } else {
            Ok(UniformPartition { x_min, x_max, n_rect })
        }
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn n_rect(&self) -> usize {
        self.n_rect
    }

    pub fn segment_width(&self) -> f64 {
        (self.x_max - self.x_min) / self.n_rect as f64
    }

    pub fn widths(&self) -> DVector<f64> {
        DVector::from_element(self.n_rect, self.segment_width())
    }

    /// n_rect + 1 evenly spaced edges, both bounds inclusive. Edge k sits at
    /// x_min + span * k/n so the last edge lands on x_max.
    pub fn edges(&self) -> DVector<f64> {
        let span = self.x_max - self.x_min;
        let n = self.n_rect as f64;
        DVector::from_fn(self.n_rect + 1, |k, _| self.x_min + span * (k as f64) / n)
    }

    pub fn sample_points(&self, mode: SamplingMode) -> DVector<f64> {
        let edges = self.edges();
        match mode {
            SamplingMode::Left => DVector::from_fn(self.n_rect, |k, _| edges[k]),
            SamplingMode::Right => DVector::from_fn(self.n_rect, |k, _| edges[k + 1]),
            SamplingMode::Center => {
                DVector::from_fn(self.n_rect, |k, _| 0.5 * (edges[k] + edges[k + 1]))
            }
        }
    }
}
