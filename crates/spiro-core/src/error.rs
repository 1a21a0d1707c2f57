use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpiroError>;

#[derive(Debug, Error)]
pub enum SpiroError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("boundary violation: {0}")]
    BoundaryViolation(String),
}
