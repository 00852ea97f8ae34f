//! Authentication event repository trait defining the append-only event store.
//!
//! Events are written once and never updated or deleted through this
//! interface. Queries are bounded: results come back ascending by
//! timestamp and are capped at [`EVENT_QUERY_LIMIT`] rows, so a decision
//! over deep history reads the oldest rows of that history first.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::auth_event::{AuthEvent, AuthEventType};
use crate::errors::DomainError;

/// Maximum number of events a single query returns
pub const EVENT_QUERY_LIMIT: usize = 500;

/// Time range with exclusive bounds on both ends.
///
/// A query with a range returns events where `after < occurred_at < before`.
/// Events stamped exactly at either bound are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    /// Lower bound, exclusive (seconds since epoch)
    pub after: i64,
    /// Upper bound, exclusive (seconds since epoch)
    pub before: i64,
}

/// Repository trait for the append-only authentication event store
///
/// Implementations should handle writes efficiently to avoid blocking
/// authentication flows; the append path sits on every login attempt.
#[async_trait]
pub trait AuthEventRepository: Send + Sync {
    /// Append a new event
    ///
    /// The event identifier is generated by the caller and the insert is
    /// conditional on that identifier being absent, which makes a retried
    /// append of the same event harmless.
    ///
    /// # Arguments
    /// * `event` - The event to persist
    ///
    /// # Returns
    /// * `Ok(())` on successful append
    /// * `Err(DomainError)` if the operation fails
    async fn append(&self, event: &AuthEvent) -> Result<(), DomainError>;

    /// Query events for one account and one event type
    ///
    /// # Arguments
    /// * `account_id` - The account to query
    /// * `event_type` - The event type to match
    /// * `range` - Optional exclusive time range filter
    ///
    /// # Returns
    /// * Matching events ascending by timestamp, at most [`EVENT_QUERY_LIMIT`] rows
    async fn find_by_account_and_type(
        &self,
        account_id: Uuid,
        event_type: AuthEventType,
        range: Option<TimeRange>,
    ) -> Result<Vec<AuthEvent>, DomainError>;
}
