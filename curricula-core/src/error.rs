// curricula-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurriculaError {
    // --- DOMAIN (classification rules, group encoding) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE (IO, CSV, config) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Internal Error: {0}")]
    InternalError(String),

    #[error("Unsafe path traversal detected: {0}")]
    UnsafePath(String),
}

impl From<std::io::Error> for CurriculaError {
    fn from(err: std::io::Error) -> Self {
        CurriculaError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<csv::Error> for CurriculaError {
    fn from(err: csv::Error) -> Self {
        CurriculaError::Infrastructure(InfrastructureError::Csv(err))
    }
}
