use sg_core::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid grid: {0}")]
    Invalid(#[from] GridError),
}

pub type LoadResult<T> = Result<T, LoadError>;
