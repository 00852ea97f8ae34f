//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! verifies its signature, expiry and issuer, and injects the caller's
//! identity into the request for handlers to extract.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    http::StatusCode,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::{
    fmt,
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

use gate_core::domain::entities::token::{Claims, JWT_ISSUER};
use gate_core::domain::value_objects::Rights;
use gate_shared::types::ErrorBody;

/// Caller identity injected into requests that passed the JWT guard
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Account ID extracted from the subject claim
    pub account_id: Uuid,
    /// Email carried in the token
    pub email: String,
    /// Rights map carried in the token
    pub rights: Rights,
}

impl AuthContext {
    /// Creates an authentication context from verified claims
    pub fn from_claims(claims: Claims) -> Result<Self, RejectedToken> {
        let account_id = claims.account_id().map_err(|_| RejectedToken)?;
        Ok(Self {
            account_id,
            email: claims.email,
            rights: claims.rights,
        })
    }
}

/// Error responder for requests the guard turns away.
///
/// Carries no detail: a missing header, a bad signature and an expired
/// token all answer the same 401 kind.
#[derive(Debug)]
pub struct RejectedToken;

impl fmt::Display for RejectedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthenticationFailure")
    }
}

impl ResponseError for RejectedToken {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized().json(ErrorBody::new("AuthenticationFailure"))
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    /// Shared signing secret used for verification
    jwt_secret: String,
}

impl JwtAuth {
    /// Creates the middleware reading the secret from the environment
    pub fn new() -> Self {
        Self {
            jwt_secret: std::env::var("AUTH_JWT_SECRET").unwrap_or_default(),
        }
    }

    /// Creates the middleware with a specific secret
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
        }
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            jwt_secret: self.jwt_secret.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    jwt_secret: String,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let jwt_secret = self.jwt_secret.clone();

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(RejectedToken.into()),
            };

            let context = match verify_token(&token, &jwt_secret) {
                Ok(context) => context,
                Err(e) => return Err(e.into()),
            };

            // Inject caller identity into request extensions
            req.extensions_mut().insert(context);

            service.call(req).await
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Verifies a session token against the shared secret
fn verify_token(token: &str, secret: &str) -> Result<AuthContext, RejectedToken> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[JWT_ISSUER]);
    validation.validate_exp = true;

    let token_data =
        decode::<Claims>(token, &decoding_key, &validation).map_err(|_| RejectedToken)?;

    AuthContext::from_claims(token_data.claims)
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| RejectedToken.into());

        ready(result)
    }
}
