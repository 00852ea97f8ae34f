use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::handlers::error::domain_error_response;

use gate_core::repositories::{AccountRepository, AuthEventRepository};
use gate_core::services::auth::AuthService;
use gate_core::services::password::PasswordHasherTrait;
use gate_core::services::provisioning::ProvisioningService;
use gate_core::services::token::TokenService;
use gate_shared::config::JwtConfig;

/// Application state that holds shared services
pub struct AppState<A, E, H>
where
    A: AccountRepository,
    E: AuthEventRepository,
    H: PasswordHasherTrait,
{
    pub auth_service: Arc<AuthService<A, E, H>>,
    pub provisioning_service: Arc<ProvisioningService<A, E, H>>,
    pub token_service: Arc<TokenService>,
    pub jwt: JwtConfig,
}

/// Handler for POST /login
///
/// Authenticates an account by email and password and returns a signed
/// session token. Failed credentials and locked accounts both answer 401;
/// the body names which of the two it was.
///
/// # Request Body
///
/// ```json
/// {
///     "userEmail": "ada@example.com",
///     "userPassword": "correct horse battery staple"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "jwt": "eyJhbGciOiJIUzI1NiIs..."
/// }
/// ```
///
/// ## Errors
/// - 401 `{"error": "AuthenticationFailure"}` when the credentials do not match
/// - 401 `{"error": "AuthenticationBlocked-AccountLocked"}` when the account is locked
/// - 500 `{"error": "Unexpected Error"}` when storage or token signing fails
pub async fn login<A, E, H>(
    state: web::Data<AppState<A, E, H>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    E: AuthEventRepository + 'static,
    H: PasswordHasherTrait + 'static,
{
    tracing::info!(email = %request.user_email, "Processing login request");

    let account = match state
        .auth_service
        .authenticate(&request.user_email, &request.user_password)
        .await
    {
        Ok(account) => account,
        Err(error) => return domain_error_response(error),
    };

    match state.token_service.issue(&account) {
        Ok(jwt) => {
            tracing::info!(email = %account.email, "Login succeeded");
            HttpResponse::Ok().json(TokenResponse { jwt })
        }
        Err(error) => domain_error_response(error),
    }
}
