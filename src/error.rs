//! Typed errors surfaced by the configuration core

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CcbError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Provider '{0}' not found")]
    NotFound(String),
}

pub type CcbResult<T> = Result<T, CcbError>;
