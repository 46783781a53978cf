use sg_core::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("strict validation failed: {0}")]
    Validation(#[from] GridError),
}

pub type SimResult<T> = Result<T, SimError>;
