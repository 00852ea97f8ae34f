use actix_web::{web, HttpResponse};
use std::collections::HashMap;
use validator::Validate;

use crate::dto::auth::{AccountResponse, CreateAccountRequest};
use crate::handlers::error::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::auth::AppState;

use gate_core::domain::entities::NewAccount;
use gate_core::domain::value_objects::{has_required_rights, Rights};
use gate_core::repositories::{AccountRepository, AuthEventRepository};
use gate_core::services::password::PasswordHasherTrait;
use gate_shared::types::ErrorBody;

/// Handler for POST /user/create
///
/// Provisions a new account on behalf of the authenticated caller. The
/// caller is re-resolved against storage and must hold the
/// `accounts.create` right; the rights carried inside the token are not
/// trusted on their own.
///
/// # Request Body
///
/// ```json
/// {
///     "userEmail": "grace@example.com",
///     "userPassword": "a strong password",
///     "userFirstName": "Grace",
///     "userLastName": "Hopper",
///     "userAge": 35,
///     "userRights": { "accounts": { "create": false } },
///     "userJWTPayload": { "theme": "dark" }
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// The stored account without its password hash.
///
/// ## Errors
/// - 401 `{"error": "AuthenticationFailure"}` when the caller cannot be resolved or lacks the right
/// - 409 `{"error": "UserExists"}` when the email is already registered
/// - 422 `{"error": "Input Does Not Match Specification"}` when a field fails validation
/// - 500 `{"error": "FailedToCreateUser"}` when the insert fails
pub async fn create_account<A, E, H>(
    state: web::Data<AppState<A, E, H>>,
    auth: AuthContext,
    request: web::Json<CreateAccountRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    E: AuthEventRepository + 'static,
    H: PasswordHasherTrait + 'static,
{
    // Resolve the caller from storage; this also records the access event.
    let caller = match state
        .auth_service
        .authenticate_by_trusted_id(auth.account_id)
        .await
    {
        Ok(caller) => caller,
        Err(error) => return domain_error_response(error),
    };

    let required = Rights::from([(
        "accounts".to_string(),
        HashMap::from([("create".to_string(), true)]),
    )]);
    if !has_required_rights(&caller.rights, &required) {
        tracing::warn!(
            caller = %caller.email,
            "Account creation refused: caller lacks the accounts.create right"
        );
        return HttpResponse::Unauthorized().json(ErrorBody::new("AuthenticationFailure"));
    }

    if let Err(errors) = request.validate() {
        tracing::warn!(errors = %errors, "Account creation request failed validation");
        return HttpResponse::UnprocessableEntity()
            .json(ErrorBody::new("Input Does Not Match Specification"));
    }

    let request = request.into_inner();
    let new_account = NewAccount {
        email: request.user_email,
        password: request.user_password,
        first_name: request.user_first_name,
        last_name: request.user_last_name,
        age: request.user_age,
        rights: request.user_rights,
        jwt_payload: request.user_jwt_payload,
    };

    match state.provisioning_service.create_account(new_account).await {
        Ok(account) => {
            tracing::info!(email = %account.email, "Account created");
            HttpResponse::Ok().json(AccountResponse::from(account))
        }
        Err(error) => domain_error_response(error),
    }
}
