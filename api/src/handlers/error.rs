//! Mapping from domain errors to HTTP responses.
//!
//! Every failure crosses the boundary as a minimal `{"error": "<kind>"}`
//! body. Backend detail stays in the logs; the wire carries the kind only.

use actix_web::HttpResponse;
use tracing::error;

use gate_core::errors::{AuthError, DomainError, ProvisioningError};
use gate_shared::types::ErrorBody;

/// Convert a domain error into its HTTP response.
///
/// Authentication failures and locked accounts both answer 401 but carry
/// distinct kinds, so callers can message "try later" without learning
/// whether the credentials were right.
pub fn domain_error_response(error: DomainError) -> HttpResponse {
    error!(error = %error, "Request failed");

    match error {
        DomainError::Auth(AuthError::AuthenticationFailure) => {
            HttpResponse::Unauthorized().json(ErrorBody::new("AuthenticationFailure"))
        }
        DomainError::Auth(AuthError::AccountLocked) => {
            HttpResponse::Unauthorized().json(ErrorBody::new("AuthenticationBlocked-AccountLocked"))
        }
        DomainError::Validation(_) => HttpResponse::UnprocessableEntity()
            .json(ErrorBody::new("Input Does Not Match Specification")),
        DomainError::Provisioning(ProvisioningError::UserExists) => {
            HttpResponse::Conflict().json(ErrorBody::new("UserExists"))
        }
        DomainError::Provisioning(ProvisioningError::FailedToCreateUser) => {
            HttpResponse::InternalServerError().json(ErrorBody::new("FailedToCreateUser"))
        }
        DomainError::Token(_) | DomainError::Internal { .. } => {
            HttpResponse::InternalServerError().json(ErrorBody::new("Unexpected Error"))
        }
    }
}
