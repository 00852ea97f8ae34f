//! Account entity representing a registered account in the Gatehouse system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::domain::value_objects::Rights;
use crate::errors::ValidationError;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum length for first and last names
pub const MAX_NAME_LENGTH: usize = 30;

/// Maximum serialized length for the rights and payload JSON blobs
pub const MAX_OPAQUE_JSON_LENGTH: usize = 3000;

/// Upper bound for the age field
pub const MAX_AGE: i32 = 150;

/// Account entity representing a registered account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Email address. Uniqueness is enforced by the provisioning flow,
    /// not by the backing store.
    pub email: String,

    /// Bcrypt hash of the password. Never serialized.
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Age in years
    pub age: i32,

    /// Opaque rights map, passed through to session tokens
    pub rights: Rights,

    /// Opaque caller-supplied payload, passed through to session tokens
    pub jwt_payload: JsonValue,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new Account instance with a fresh identifier
    pub fn new(
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        age: i32,
        rights: Rights,
        jwt_payload: JsonValue,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            first_name,
            last_name,
            age,
            rights,
            jwt_payload,
            created_at: Utc::now(),
        }
    }
}

/// Creation request for a new account, carrying the plaintext password
/// until it is hashed by the provisioning flow.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub rights: Rights,
    pub jwt_payload: JsonValue,
}

impl NewAccount {
    /// Validates all fields against the provisioning rules.
    ///
    /// Runs before any storage access; a failure here means no lookup,
    /// no insert, and no event is ever attempted for the request.
    ///
    /// # Returns
    ///
    /// `Ok(())` if every field is acceptable, the first failing rule otherwise
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !gate_shared::validation::not_empty(&self.email) {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            });
        }
        if !gate_shared::validation::is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::TooShort {
                field: "password".to_string(),
                min: MIN_PASSWORD_LENGTH,
            });
        }
        if !gate_shared::validation::not_empty(&self.first_name) {
            return Err(ValidationError::RequiredField {
                field: "first_name".to_string(),
            });
        }
        if self.first_name.len() > MAX_NAME_LENGTH {
            return Err(ValidationError::TooLong {
                field: "first_name".to_string(),
                max: MAX_NAME_LENGTH,
            });
        }
        if !gate_shared::validation::not_empty(&self.last_name) {
            return Err(ValidationError::RequiredField {
                field: "last_name".to_string(),
            });
        }
        if self.last_name.len() > MAX_NAME_LENGTH {
            return Err(ValidationError::TooLong {
                field: "last_name".to_string(),
                max: MAX_NAME_LENGTH,
            });
        }
        if self.age < 0 || self.age > MAX_AGE {
            return Err(ValidationError::OutOfRange {
                field: "age".to_string(),
            });
        }
        Self::check_opaque_length("rights", &self.rights)?;
        Self::check_opaque_length("jwt_payload", &self.jwt_payload)?;
        Ok(())
    }

    fn check_opaque_length<T: Serialize>(field: &str, value: &T) -> Result<(), ValidationError> {
        let serialized = serde_json::to_string(value).map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
        })?;
        if serialized.len() > MAX_OPAQUE_JSON_LENGTH {
            return Err(ValidationError::TooLong {
                field: field.to_string(),
                max: MAX_OPAQUE_JSON_LENGTH,
            });
        }
        Ok(())
    }
}
