//! Session token signing and verification.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::account::Account;
use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Stateless JWT service: signs session tokens for authenticated accounts
/// and verifies tokens presented on later requests.
///
/// Tokens are HS256-signed with a shared secret. Verification enforces the
/// issuer claim and expiry. There is no server-side token store, so an
/// issued token stays valid until it expires.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a token service from the given configuration.
    ///
    /// Both keys derive from the configured secret, so tokens issued by one
    /// instance verify on any instance sharing that secret.
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Signs a session token carrying the account's identity, profile and
    /// authorization claims.
    ///
    /// # Arguments
    ///
    /// * `account` - The account that just authenticated
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded JWT
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed
    pub fn issue(&self, account: &Account) -> Result<String, DomainError> {
        let mut claims = Claims::new(account);
        claims.exp = claims.iat + self.config.token_expiry_secs;

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a session token and returns the decoded claims.
    ///
    /// Checks the signature, the issuer and the expiry.
    ///
    /// # Arguments
    ///
    /// * `token` - The JWT string to verify
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError::TokenExpired)` - Token has expired
    /// * `Err(TokenError::InvalidToken)` - Any other defect
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::TokenExpired)
                } else {
                    DomainError::Token(TokenError::InvalidToken)
                }
            })?;

        Ok(token_data.claims)
    }
}
