//! Application Errors
//!
//! Only the host boundary can fail; the components themselves are total.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown log level: {value}")]
    InvalidLogLevel { value: String },

    #[error("Failed to initialize logger: {0}")]
    Logger(String),
}
