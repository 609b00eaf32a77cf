//! Cross-cutting error types for Ecotrack.
//!
//! Schema and configuration errors live in their own crates. The CLI
//! converges everything into `anyhow`.

use thiserror::Error;

/// Errors raised by operations on the contract types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A lifecycle transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// A value broke an invariant of its shape.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
