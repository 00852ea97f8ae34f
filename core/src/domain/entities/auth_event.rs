//! Authentication event entity backing the append-only audit trail.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// Event types recorded against an account.
///
/// These records are the sole source of truth for lockout decisions;
/// there is no separate mutable attempt counter anywhere in the system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventType {
    /// A password check succeeded
    SuccessfulAuthentication,

    /// A completed attempt was rejected: wrong password or locked account
    FailedLoginAttempt,

    /// A trusted caller resolved the account by identifier without a password
    AccountAccessed,

    /// The account row was persisted and read back
    AccountCreated,
}

impl AuthEventType {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuccessfulAuthentication => "successful_authentication",
            Self::FailedLoginAttempt => "failed_login_attempt",
            Self::AccountAccessed => "account_accessed",
            Self::AccountCreated => "account_created",
        }
    }

    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "successful_authentication" => Some(Self::SuccessfulAuthentication),
            "failed_login_attempt" => Some(Self::FailedLoginAttempt),
            "account_accessed" => Some(Self::AccountAccessed),
            "account_created" => Some(Self::AccountCreated),
            _ => None,
        }
    }
}

/// An immutable record of an authentication-relevant occurrence.
///
/// Events are append-only: nothing in the system mutates or deletes one
/// after it has been written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthEvent {
    /// Unique identifier, generated by the writer before the append
    pub event_id: Uuid,

    /// Account the event belongs to
    pub account_id: Uuid,

    /// What happened
    pub event_type: AuthEventType,

    /// Seconds since the Unix epoch
    pub occurred_at: i64,

    /// Optional structured context in JSON format
    pub metadata: Option<JsonValue>,
}

impl AuthEvent {
    /// Create a new event stamped with the current time
    pub fn new(account_id: Uuid, event_type: AuthEventType) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            account_id,
            event_type,
            occurred_at: Utc::now().timestamp(),
            metadata: None,
        }
    }

    /// Attach structured metadata
    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Override the timestamp with an explicit value
    pub fn with_timestamp(mut self, occurred_at: i64) -> Self {
        self.occurred_at = occurred_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_event_stamped_with_current_time() {
        let account_id = Uuid::new_v4();
        let before = Utc::now().timestamp();
        let event = AuthEvent::new(account_id, AuthEventType::FailedLoginAttempt);
        let after = Utc::now().timestamp();

        assert_eq!(event.account_id, account_id);
        assert_eq!(event.event_type, AuthEventType::FailedLoginAttempt);
        assert!(event.occurred_at >= before && event.occurred_at <= after);
        assert!(event.metadata.is_none());
    }

    #[test]
    fn test_event_identifiers_are_unique() {
        let account_id = Uuid::new_v4();
        let first = AuthEvent::new(account_id, AuthEventType::SuccessfulAuthentication);
        let second = AuthEvent::new(account_id, AuthEventType::SuccessfulAuthentication);

        assert_ne!(first.event_id, second.event_id);
    }

    #[test]
    fn test_with_metadata() {
        let event = AuthEvent::new(Uuid::new_v4(), AuthEventType::AccountCreated)
            .with_metadata(json!({"source": "provisioning"}));

        assert_eq!(event.metadata, Some(json!({"source": "provisioning"})));
    }

    #[test]
    fn test_with_timestamp() {
        let event = AuthEvent::new(Uuid::new_v4(), AuthEventType::FailedLoginAttempt)
            .with_timestamp(1_700_000_000);

        assert_eq!(event.occurred_at, 1_700_000_000);
    }

    #[test]
    fn test_event_type_storage_round_trip() {
        let all = [
            AuthEventType::SuccessfulAuthentication,
            AuthEventType::FailedLoginAttempt,
            AuthEventType::AccountAccessed,
            AuthEventType::AccountCreated,
        ];

        for event_type in all {
            assert_eq!(AuthEventType::from_str(event_type.as_str()), Some(event_type));
        }
    }

    #[test]
    fn test_unknown_event_type_is_rejected() {
        assert_eq!(AuthEventType::from_str("password_reset"), None);
    }

    #[test]
    fn test_event_type_serialization() {
        let json = serde_json::to_string(&AuthEventType::FailedLoginAttempt).unwrap();
        assert_eq!(json, "\"failed_login_attempt\"");

        let json = serde_json::to_string(&AuthEventType::SuccessfulAuthentication).unwrap();
        assert_eq!(json, "\"successful_authentication\"");
    }
}
