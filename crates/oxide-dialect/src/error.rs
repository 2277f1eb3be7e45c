//! Error types for SQL generation.

use crate::dialect::DialectKind;
use crate::validation::ValidationErrors;

/// Errors that can occur while generating SQL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The statement failed validation.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// No generator handles the statement on this dialect.
    #[error("{statement} is not supported on {dialect}")]
    UnsupportedDialect {
        /// The statement that was requested.
        statement: &'static str,
        /// The target dialect.
        dialect: DialectKind,
    },
}

/// Result type for SQL generation.
pub type Result<T> = std::result::Result<T, GenerateError>;
