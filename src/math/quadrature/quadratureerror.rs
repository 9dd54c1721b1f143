use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuadratureError {
    #[error("rectangle count must be at least 1")]
    ZeroRectangleCount,
    #[error("unknown sampling mode '{0}', expected one of 'left', 'right', 'center'")]
    UnknownSamplingMode(String),
    #[error("integrand returned {actual} heights for {expected} sample points")]
    SampleLengthMismatch { expected: usize, actual: usize }
}
