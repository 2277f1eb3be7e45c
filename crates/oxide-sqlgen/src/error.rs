//! Error types for the SQL generator CLI.

use oxide_dialect::GenerateError;

/// Errors that can occur while generating SQL from the command line.
#[derive(Debug, thiserror::Error)]
pub enum SqlgenError {
    /// IO error (reading config or request files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The statement could not be generated.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// A command-line or config value is missing or invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for SQL generator operations.
pub type Result<T> = std::result::Result<T, SqlgenError>;
