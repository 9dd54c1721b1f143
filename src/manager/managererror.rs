use serde::Deserialize;
use thiserror::Error;

use crate::math::quadrature::quadratureerror::QuadratureError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    JsonParse(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFound(String),
    #[error("rectangle count must be a positive integer, got {0}")]
    NegativeRectangleCount(i64),
    #[error(transparent)]
    Quadrature(#[from] QuadratureError)
}

impl ManagerError {
    pub fn from_json_or_json_parse_error<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
        where T: for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParse)
    }
}
