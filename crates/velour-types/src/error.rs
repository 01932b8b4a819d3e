//! Error types for the Velour engine.
//!
//! All crates return `VelourResult<T>` from fallible operations.
//! Note that most of the runtime API is deliberately infallible:
//! unknown preset names fall back to defaults and operations on
//! missing bodies are no-ops, so errors only surface at the data
//! boundary (validation, I/O, configuration).

use thiserror::Error;

/// Unified error type for the Velour engine.
#[derive(Debug, Error)]
pub enum VelourError {
    /// Body data is malformed or inconsistent.
    #[error("Invalid body: {0}")]
    InvalidBody(String),

    /// Render geometry is malformed or inconsistent.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Host-supplied boundary data failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, VelourError>`.
pub type VelourResult<T> = Result<T, VelourError>;
