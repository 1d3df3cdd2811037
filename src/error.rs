//! Error types for labelkit.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum LabelError {
    /// Selector could not be parsed or evaluated
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// Configuration file, env override, or engine setup is invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// A metadata, label, or resource collaborator failed
    #[error("upstream failure: {0}")]
    Upstream(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias using [`LabelError`].
pub type Result<T> = std::result::Result<T, LabelError>;
