//! Configuration for the token service

use gate_shared::JwtConfig;

use crate::domain::entities::token::SESSION_TOKEN_EXPIRY_SECS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Session token expiry in seconds
    pub token_expiry_secs: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            token_expiry_secs: SESSION_TOKEN_EXPIRY_SECS,
        }
    }
}

impl TokenServiceConfig {
    /// Set the signing secret
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = secret.into();
        self
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            token_expiry_secs: config.token_expiry,
        }
    }
}
