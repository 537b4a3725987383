//! Error types for the cb-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// gives every frontend one error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Case error: {0}")]
    Project(String),

    #[error("Failed to read case file: {path}")]
    CaseFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write case file: {path}")]
    CaseFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Case validation failed: {0}")]
    Validation(String),

    #[error("Fuel catalog error: {0}")]
    Catalog(String),

    #[error("Calculation failed: {0}")]
    Engine(#[from] cb_engine::EngineError),

    #[error("Worker error: {0}")]
    Worker(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cb-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<cb_project::ProjectError> for AppError {
    fn from(err: cb_project::ProjectError) -> Self {
        match err {
            cb_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<cb_fuels::FuelError> for AppError {
    fn from(err: cb_fuels::FuelError) -> Self {
        AppError::Catalog(err.to_string())
    }
}
