//! Application factory
//!
//! This module provides the factory for creating the Actix-web application
//! with all routes, middleware, and shared state wired in. The factory is
//! generic over the repository and hasher implementations so integration
//! tests can run it against in-memory mocks.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::account::{create::create_account, me::me};
use crate::routes::auth::{login::login, AppState};

use gate_core::repositories::{AccountRepository, AuthEventRepository};
use gate_core::services::password::PasswordHasherTrait;
use gate_shared::types::HealthResponse;

/// Create and configure the application with all dependencies
pub fn create_app<A, E, H>(
    app_state: web::Data<AppState<A, E, H>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    E: AuthEventRepository + 'static,
    H: PasswordHasherTrait + 'static,
{
    let cors = create_cors();
    let jwt_auth = JwtAuth::with_secret(app_state.jwt.secret.clone());

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware (order matters: CORS first, then request logging)
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Authentication
        .route("/login", web::post().to(login::<A, E, H>))
        // Account routes, all behind the JWT guard
        .service(
            web::scope("/user")
                .wrap(jwt_auth)
                .route("/create", web::post().to(create_account::<A, E, H>))
                .route("/me", web::get().to(me::<A, E, H>)),
        )
        // Service info endpoint
        .route("/", web::get().to(service_info))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "gatehouse-api",
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Service info endpoint
async fn service_info() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "msg": "Authentication Service API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "login": {
                "path": "/login",
                "method": "POST",
                "request_body": {
                    "userEmail": "string",
                    "userPassword": "string"
                },
                "responses": {
                    "200": "Authentication successful, returns session token",
                    "401": "Authentication failure or account locked",
                    "500": "Unexpected error"
                }
            },
            "create": {
                "path": "/user/create",
                "method": "POST",
                "requires_auth": true,
                "responses": {
                    "200": "Account created",
                    "401": "Caller unauthenticated or lacks the accounts.create right",
                    "409": "Email already registered",
                    "422": "Input does not match specification",
                    "500": "Creation failed"
                }
            },
            "me": {
                "path": "/user/me",
                "method": "GET",
                "requires_auth": true,
                "responses": {
                    "200": "Caller's own account",
                    "401": "Caller unauthenticated"
                }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "Endpoint not found"
    }))
}
