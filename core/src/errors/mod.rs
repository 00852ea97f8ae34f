//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, ProvisioningError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// Backend failures are caught at each collaborator call site, logged with
/// context, and re-raised as `Internal`; raw store errors never cross the
/// service boundary.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Provisioning(#[from] ProvisioningError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    /// Wrap a backend failure as an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
