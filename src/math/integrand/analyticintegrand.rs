use std::rc::Rc;

use nalgebra::DVector;
use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::math::integrand::integrand::Integrand;

pub struct Constant {
    value: f64
}

impl Constant {
    pub fn new(value: f64) -> Constant {
        Constant { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Integrand for Constant {
    fn sample(&self, points: &DVector<f64>) -> DVector<f64> {
        DVector::from_element(points.len(), self.value)
    }
}

pub struct SineWave {
    amplitude: f64,
    angular_frequency: f64
}

impl SineWave {
    pub fn new(amplitude: f64, angular_frequency: f64) -> SineWave {
        SineWave { amplitude, angular_frequency }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn angular_frequency(&self) -> f64 {
        self.angular_frequency
    }
}

impl Integrand for SineWave {
    fn sample(&self, points: &DVector<f64>) -> DVector<f64> {
        points.map(|x| self.amplitude * (self.angular_frequency * x).sin())
    }
}

pub struct Polynomial {
    /// Coefficients in ascending powers of x.
    coefficients: Vec<f64>
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Polynomial {
        Polynomial { coefficients }
    }

    pub fn coefficients(&self) -> &Vec<f64> {
        &self.coefficients
    }

    fn value(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, coef| acc * x + coef)
    }
}

impl Integrand for Polynomial {
    fn sample(&self, points: &DVector<f64>) -> DVector<f64> {
        points.map(|x| self.value(x))
    }
}

#[derive(Deserialize)]
#[serde(tag = "family")]
enum AnalyticIntegrandJsonProp {
    Constant { value: f64 },
    SineWave { amplitude: f64, angular_frequency: f64 },
    Polynomial { coefficients: Vec<f64> }
}

pub fn analytic_integrand_from_json(json_value: serde_json::Value) -> Result<Rc<dyn Integrand>, ManagerError> {
    let prop: AnalyticIntegrandJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    let integrand: Rc<dyn Integrand> = match prop {
        AnalyticIntegrandJsonProp::Constant { value } => {
            Rc::new(Constant::new(value))
        },
        AnalyticIntegrandJsonProp::SineWave { amplitude, angular_frequency } => {
            Rc::new(SineWave::new(amplitude, angular_frequency))
        },
        AnalyticIntegrandJsonProp::Polynomial { coefficients } => {
            Rc::new(Polynomial::new(coefficients))
        }
    };
    Ok(integrand)
}
