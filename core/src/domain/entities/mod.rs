//! Domain entities representing core business objects.

pub mod account;
pub mod auth_event;
pub mod token;

// Re-export commonly used types
pub use account::{
    Account, NewAccount,
    MAX_AGE, MAX_NAME_LENGTH, MAX_OPAQUE_JSON_LENGTH, MIN_PASSWORD_LENGTH,
};
pub use auth_event::{AuthEvent, AuthEventType};
pub use token::{Claims, JWT_ISSUER, SESSION_TOKEN_EXPIRY_SECS};
