use actix_web::{web, HttpResponse};

use crate::dto::auth::AccountResponse;
use crate::handlers::error::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::auth::AppState;

use gate_core::repositories::{AccountRepository, AuthEventRepository};
use gate_core::services::password::PasswordHasherTrait;

/// Handler for GET /user/me
///
/// Returns the caller's own account, resolved fresh from storage rather
/// than echoed back from the token claims.
///
/// # Response
///
/// ## Success (200 OK)
/// The caller's account without its password hash.
///
/// ## Errors
/// - 401 `{"error": "AuthenticationFailure"}` when the subject no longer resolves to an account
/// - 500 `{"error": "Unexpected Error"}` when storage fails
pub async fn me<A, E, H>(
    state: web::Data<AppState<A, E, H>>,
    auth: AuthContext,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    E: AuthEventRepository + 'static,
    H: PasswordHasherTrait + 'static,
{
    match state
        .auth_service
        .authenticate_by_trusted_id(auth.account_id)
        .await
    {
        Ok(account) => HttpResponse::Ok().json(AccountResponse::from(account)),
        Err(error) => domain_error_response(error),
    }
}
