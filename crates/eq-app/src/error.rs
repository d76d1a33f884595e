//! Error types for the eq-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Input not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Report error: {0}")]
    Report(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for eq-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<eq_report::ReportError> for AppError {
    fn from(err: eq_report::ReportError) -> Self {
        AppError::Report(err.to_string())
    }
}

impl From<eq_store::StoreError> for AppError {
    fn from(err: eq_store::StoreError) -> Self {
        AppError::Store(err.to_string())
    }
}
