use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;
use std::rc::Rc;

use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::integrand::analyticintegrand::analytic_integrand_from_json;
use crate::math::integrand::integrand::Integrand;
use crate::math::quadrature::riemannsum::{
    DEFAULT_RECTANGLE_COUNT,
    IntegrationRequest
};
use crate::math::quadrature::samplingmode::SamplingMode;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    integrand: Vec<serde_json::Value>,
    job: Vec<serde_json::Value>
}

#[derive(Clone)]
pub struct IntegrationJob {
    request: IntegrationRequest,
    integrand_name: String
}

impl IntegrationJob {
    pub fn request(&self) -> &IntegrationRequest {
        &self.request
    }

    pub fn integrand_name(&self) -> &String {
        &self.integrand_name
    }
}

#[derive(Deserialize)]
struct IntegrationJobJsonProp {
    x_min: f64,
    x_max: f64,
    n_rect: Option<i64>,
    mode: Option<String>,
    integrand: String
}

fn rectangle_count_from_prop(n_rect: Option<i64>) -> Result<usize, ManagerError> {
    match n_rect {
        None => Ok(DEFAULT_RECTANGLE_COUNT),
        Some(n) if n < 0 => Err(ManagerError::NegativeRectangleCount(n)),
        Some(n) => Ok(n as usize)
    }
}

fn sampling_mode_from_prop(mode: Option<String>) -> Result<SamplingMode, ManagerError> {
    match mode {
        None => Ok(SamplingMode::Center),
        Some(keyword) => {
            let parsed = SamplingMode::parse(keyword.as_str())?;
            Ok(parsed)
        }
    }
}

fn integration_job_from_json(json_value: serde_json::Value) -> Result<IntegrationJob, ManagerError> {
    let prop: IntegrationJobJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    let n_rect = rectangle_count_from_prop(prop.n_rect)?;
    let mode = sampling_mode_from_prop(prop.mode)?;
    let request = IntegrationRequest::new(prop.x_min, prop.x_max, n_rect, mode)?;
    Ok(IntegrationJob { request, integrand_name: prop.integrand })
}

pub struct Configuration {
    integrand_manager_cell: RefCell<Manager<Rc<dyn Integrand>>>,
    job_manager_cell: RefCell<Manager<IntegrationJob>>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            integrand_manager_cell: RefCell::new(Manager::new(analytic_integrand_from_json)),
            job_manager_cell: RefCell::new(Manager::new(integration_job_from_json))
        }
    }

    pub fn integrand_manager(&self) -> RefMut<'_, Manager<Rc<dyn Integrand>>> {
        self.integrand_manager_cell.borrow_mut()
    }

    pub fn job_manager(&self) -> RefMut<'_, Manager<IntegrationJob>> {
        self.job_manager_cell.borrow_mut()
    }

    pub fn job_names(&self) -> Vec<String> {
        let job_manager = self.job_manager_cell.borrow_mut();
        let map = job_manager.map();
        let mut names: Vec<String> = map.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn from_reader(&self, file_path: String) -> Result<(), ManagerError> {
        let file = File::open(file_path).map_err(ManagerError::Io)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader).map_err(ManagerError::JsonParse)?;
        let integrand_manager = self.integrand_manager_cell.borrow_mut();
        let _ = integrand_manager.insert_obj_from_json_vec(&json_prop.integrand)?;
        let job_manager = self.job_manager_cell.borrow_mut();
        let _ = job_manager.insert_obj_from_json_vec(&json_prop.job)?;
        Ok(())
    }
}
