//! Error handling for the career compass engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerCompassError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid search criteria: {0}")]
    InvalidCriteria(String),

    #[error("Job supply error: {0}")]
    Supply(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, CareerCompassError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CareerCompassError {
    fn from(err: anyhow::Error) -> Self {
        CareerCompassError::Supply(err.to_string())
    }
}
