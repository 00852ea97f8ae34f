//! CORS middleware configuration for cross-origin requests.
//!
//! The service ships with permissive CORS so browser clients on any origin
//! can reach the API. Production deployments can restrict origins through
//! the `ALLOWED_ORIGINS` environment variable.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates a CORS middleware instance.
///
/// With no `ALLOWED_ORIGINS` configured, any origin is accepted. When the
/// variable holds a comma-separated origin list, only those origins pass.
///
/// # Environment Variables
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors() -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .unwrap_or_else(|_| "3600".to_string())
        .parse::<usize>()
        .unwrap_or(3600);

    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(max_age);

    match env::var("ALLOWED_ORIGINS") {
        Ok(allowed_origins) => {
            for origin in allowed_origins.split(',').map(|s| s.trim()) {
                if !origin.is_empty() {
                    tracing::info!(origin, "Adding allowed CORS origin");
                    cors = cors.allowed_origin(origin);
                }
            }
        }
        Err(_) => {
            cors = cors.allow_any_origin();
        }
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_permissive_cors() {
        env::remove_var("ALLOWED_ORIGINS");
        let _cors = create_cors();
        // CORS configuration is created successfully
    }

    #[test]
    fn test_cors_max_age_parsing() {
        env::set_var("CORS_MAX_AGE", "7200");
        let _cors = create_cors();
        env::remove_var("CORS_MAX_AGE");

        // Invalid max age falls back to default
        env::set_var("CORS_MAX_AGE", "invalid");
        let _cors = create_cors();
        env::remove_var("CORS_MAX_AGE");
    }
}
