//! Error types for the lz-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file: {path}")]
    ConfigFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Results error: {0}")]
    Results(String),
}

/// Result type for lz-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<lz_results::ResultsError> for AppError {
    fn from(err: lz_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
