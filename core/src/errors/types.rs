//! Domain-specific error types for authentication and related operations
//!
//! The variants here are the complete failure taxonomy exposed at the
//! service boundary. The presentation layer maps each kind to an HTTP
//! status and a bare wire string; no internal detail travels with them.

use thiserror::Error;

/// Authentication failures
#[derive(Error, Debug)]
pub enum AuthError {
    /// Wrong password or unknown account. The two cases are deliberately
    /// conflated so callers cannot enumerate registered emails.
    #[error("Authentication failure")]
    AuthenticationFailure,

    /// Too many recent failed attempts for this account. Distinct from a
    /// plain failure so callers can message the lockout separately.
    #[error("Authentication blocked: account locked")]
    AccountLocked,
}

/// Account provisioning failures
#[derive(Error, Debug)]
pub enum ProvisioningError {
    /// An account already exists for the requested email
    #[error("User already exists")]
    UserExists,

    /// Creation ended in an unknown final state. Callers must retry from
    /// the uniqueness check, never assume the account was not created.
    #[error("Failed to create user")]
    FailedToCreateUser,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors, raised before any storage access
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Too short: {field} (minimum {min} characters)")]
    TooShort { field: String, min: usize },

    #[error("Too long: {field} (maximum {max} characters)")]
    TooLong { field: String, max: usize },

    #[error("Out of range: {field}")]
    OutOfRange { field: String },
}
