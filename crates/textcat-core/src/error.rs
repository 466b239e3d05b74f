//! Error types for textcat.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Stopword file missing or empty, invalid smoothing, unreadable config.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Fewer than two usable categories, or a category with no data.
    #[error("Insufficient training data: {0}")]
    InsufficientTrainingData(String),

    /// Classification attempted on a classifier without trained models.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A classification target or validator input with no usable documents.
    #[error("Input data error: {0}")]
    InputData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
