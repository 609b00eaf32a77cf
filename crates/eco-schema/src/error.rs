//! Schema validation error types.

use thiserror::Error;

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator or invariant checks.
        errors: Vec<String>,
    },

    /// Schema generation, compilation, or rendering error.
    #[error("Schema generation error: {0}")]
    Generation(String),

    /// Writing exported schemas failed.
    #[error("Schema export I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchemaError {
    /// Validation messages carried by this error, empty for other variants.
    #[must_use]
    pub fn validation_errors(&self) -> &[String] {
        match self {
            Self::ValidationFailed { errors } => errors,
            _ => &[],
        }
    }
}
