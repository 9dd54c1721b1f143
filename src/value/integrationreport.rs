use std::fmt;

use crate::math::quadrature::riemannsum::IntegrationRequest;
use crate::math::quadrature::samplingmode::SamplingMode;

/// Result of an integration run together with the request parameters, kept
/// for display once the computation itself is done.
pub struct IntegrationReport {
    job_name: String,
    x_min: f64,
    x_max: f64,
    n_rect: usize,
    mode: SamplingMode,
    value: f64
}

impl IntegrationReport {
    pub fn new(job_name: String,
               request: &IntegrationRequest,
               value: f64) -> IntegrationReport {
        IntegrationReport {
            job_name,
            x_min: request.x_min(),
            x_max: request.x_max(),
            n_rect: request.n_rect(),
            mode: request.mode(),
            value
        }
    }

    pub fn job_name(&self) -> &String {
        &self.job_name
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

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for IntegrationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "{}: integral over [{}, {}] = {:.6}, method = {}, rectangles = {}",
               self.job_name,
               self.x_min,
               self.x_max,
               self.value,
               self.mode,
               self.n_rect)
    }
}
