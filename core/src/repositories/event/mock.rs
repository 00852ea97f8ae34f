//! Mock implementation of AuthEventRepository for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entities::auth_event::{AuthEvent, AuthEventType};
use crate::errors::DomainError;

use super::r#trait::{AuthEventRepository, TimeRange, EVENT_QUERY_LIMIT};

/// Mock implementation of AuthEventRepository for testing.
///
/// Appends and queries can be failed independently, so tests can drive
/// the append-failure and query-failure policies separately.
pub struct MockAuthEventRepository {
    events: Arc<Mutex<Vec<AuthEvent>>>,
    fail_appends: Arc<Mutex<bool>>,
    fail_queries: Arc<Mutex<bool>>,
}

impl MockAuthEventRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            fail_appends: Arc::new(Mutex::new(false)),
            fail_queries: Arc::new(Mutex::new(false)),
        }
    }

    /// Seed an event directly, bypassing the append path
    pub fn seed(&self, event: AuthEvent) {
        self.events.lock().unwrap().push(event);
    }

    /// Set whether appends should fail
    pub fn set_fail_appends(&self, fail: bool) {
        *self.fail_appends.lock().unwrap() = fail;
    }

    /// Set whether queries should fail
    pub fn set_fail_queries(&self, fail: bool) {
        *self.fail_queries.lock().unwrap() = fail;
    }

    /// Get all stored events for testing
    pub fn all_events(&self) -> Vec<AuthEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Get all stored events for one account
    pub fn events_for(&self, account_id: Uuid) -> Vec<AuthEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.account_id == account_id)
            .cloned()
            .collect()
    }

    /// Clear all events
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl Default for MockAuthEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthEventRepository for MockAuthEventRepository {
    async fn append(&self, event: &AuthEvent) -> Result<(), DomainError> {
        if *self.fail_appends.lock().unwrap() {
            return Err(DomainError::Internal {
                message: "Mock event store error".to_string(),
            });
        }

        let mut events = self.events.lock().unwrap();
        if events.iter().any(|e| e.event_id == event.event_id) {
            return Ok(());
        }
        events.push(event.clone());
        Ok(())
    }

    async fn find_by_account_and_type(
        &self,
        account_id: Uuid,
        event_type: AuthEventType,
        range: Option<TimeRange>,
    ) -> Result<Vec<AuthEvent>, DomainError> {
        if *self.fail_queries.lock().unwrap() {
            return Err(DomainError::Internal {
                message: "Mock event store error".to_string(),
            });
        }

        let events = self.events.lock().unwrap();
        let mut result: Vec<AuthEvent> = events
            .iter()
            .filter(|e| e.account_id == account_id && e.event_type == event_type)
            .filter(|e| match range {
                Some(r) => e.occurred_at > r.after && e.occurred_at < r.before,
                None => true,
            })
            .cloned()
            .collect();

        result.sort_by_key(|e| e.occurred_at);
        result.truncate(EVENT_QUERY_LIMIT);
        Ok(result)
    }
}
