use crate::math::integrand::integrand::Integrand;
use crate::math::quadrature::partition::UniformPartition;
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::samplingmode::SamplingMode;

pub const DEFAULT_RECTANGLE_COUNT: usize = 10_000;

#[derive(Clone, Copy)]
pub struct IntegrationRequest {
    x_min: f64,
    x_max: f64,
    n_rect: usize,
    mode: SamplingMode
}

impl IntegrationRequest {
    pub fn new(x_min: f64,
               x_max: f64,
               n_rect: usize,
               mode: SamplingMode) -> Result<IntegrationRequest, QuadratureError> {
        if n_rect == 0 {
            Err(QuadratureError::ZeroRectangleCount)
        } else {
            Ok(IntegrationRequest { x_min, x_max, n_rect, mode })
        }
    }

    pub fn with_bounds(x_min: f64, x_max: f64) -> IntegrationRequest {
        IntegrationRequest {
            x_min,
            x_max,
            n_rect: DEFAULT_RECTANGLE_COUNT,
            mode: SamplingMode::Center
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

    pub fn mode(&self) -> SamplingMode {
        self.mode
    }

    pub fn partition(&self) -> Result<UniformPartition, QuadratureError> {
        UniformPartition::new(self.x_min, self.x_max, self.n_rect)
    }
}

/// Rectangle-rule approximation of the definite integral of `integrand` over
/// the request's bounds: one vectorized evaluation at the sample points
/// selected by the request's mode, then the dot product with the segment
/// widths.
pub fn integrate(integrand: &dyn Integrand,
                 request: &IntegrationRequest) -> Result<f64, QuadratureError> {
    let partition = request.partition()?;
    let widths = partition.widths();
    let points = partition.sample_points(request.mode());
    let heights = integrand.sample(&points);
    if heights.len() != widths.len() {
        Err(QuadratureError::SampleLengthMismatch {
            expected: widths.len(),
            actual: heights.len()
        })
    } else {
        Ok(widths.dot(&heights))
    }
}
