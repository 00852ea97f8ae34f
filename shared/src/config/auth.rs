//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Minimum length accepted for the JWT signing secret.
///
/// A secret shorter than this fails the complexity test and the server
/// refuses to start.
pub const MIN_SECRET_LENGTH: usize = 8;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing session tokens
    pub secret: String,

    /// Session token lifetime in seconds
    pub token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-change-in-production"),
            token_expiry: 3600, // 1 hour
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("AUTH_JWT_SECRET")
            .unwrap_or_else(|_| JwtConfig::default().secret);
        let token_expiry = std::env::var("AUTH_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .unwrap_or(3600);

        Self {
            secret,
            token_expiry,
        }
    }

    /// Set the token lifetime in seconds
    pub fn with_token_expiry(mut self, seconds: i64) -> Self {
        self.token_expiry = seconds;
        self
    }

    /// Check the signing secret against the complexity requirements.
    ///
    /// Returns a description of the violation when the secret is too weak.
    pub fn validate(&self) -> Result<(), String> {
        if self.secret.len() < MIN_SECRET_LENGTH {
            return Err(format!(
                "JWT secret fails complexity test: must be at least {} characters",
                MIN_SECRET_LENGTH
            ));
        }
        Ok(())
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-change-in-production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.token_expiry, 3600);
        assert!(config.is_using_default_secret());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-strong-secret").with_token_expiry(600);
        assert_eq!(config.token_expiry, 600);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_short_secret_fails_complexity() {
        let config = JwtConfig::new("short");
        let err = config.validate().unwrap_err();
        assert!(err.contains("complexity"));
    }

    #[test]
    fn test_minimum_length_secret_passes() {
        let config = JwtConfig::new("12345678");
        assert!(config.validate().is_ok());
    }
}
