//! Session token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::value_objects::Rights;
use crate::errors::TokenError;

/// Session token expiration time (1 hour)
pub const SESSION_TOKEN_EXPIRY_SECS: i64 = 3600;

/// JWT issuer
pub const JWT_ISSUER: &str = "gatehouse";

/// Claims structure for the session token payload.
///
/// Everything the account carries except the password hash travels in the
/// token, so downstream services can authorize requests without a lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Email of the authenticated account
    pub email: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Age
    pub age: i32,

    /// Rights map carried for downstream authorization checks
    pub rights: Rights,

    /// Opaque caller-supplied payload
    pub payload: JsonValue,
}

impl Claims {
    /// Creates claims for a session token
    ///
    /// # Arguments
    ///
    /// * `account` - The authenticated account the token represents
    ///
    /// # Returns
    ///
    /// A new `Claims` instance expiring one hour from now
    pub fn new(account: &Account) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(SESSION_TOKEN_EXPIRY_SECS);

        Self {
            sub: account.id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            age: account.age,
            rights: account.rights.clone(),
            payload: account.jwt_payload.clone(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the account ID from the claims
    ///
    /// # Returns
    ///
    /// `Ok(Uuid)` if the subject parses as a UUID, `TokenError::InvalidClaims` otherwise
    pub fn account_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::InvalidClaims)
    }
}
