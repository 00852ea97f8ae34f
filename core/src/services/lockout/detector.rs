//! Suspicious activity detection over the authentication event history

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::auth_event::AuthEventType;
use crate::errors::DomainResult;
use crate::repositories::event::{AuthEventRepository, TimeRange};

use super::config::LockoutConfig;

/// Detects brute-force and credential-stuffing patterns for one account.
///
/// The detector owns no state of its own. Each check queries the event
/// store and recomputes the decision, so a successful login or the
/// passage of time unlocks an account without any explicit unlock step.
pub struct SuspiciousActivityDetector<E>
where
    E: AuthEventRepository,
{
    /// Event store the decision is derived from
    events: Arc<E>,
    /// Detection thresholds
    config: LockoutConfig,
}

impl<E> SuspiciousActivityDetector<E>
where
    E: AuthEventRepository,
{
    /// Create a new detector
    pub fn new(events: Arc<E>, config: LockoutConfig) -> Self {
        Self { events, config }
    }

    /// Create a new detector with default thresholds
    pub fn with_defaults(events: Arc<E>) -> Self {
        Self::new(events, LockoutConfig::default())
    }

    /// Report whether the account is locked out right now.
    ///
    /// The decision window opens at the later of the most recent
    /// successful authentication and `now - lookback_days`, and closes at
    /// `now`; both bounds are exclusive. Failed attempts inside the window
    /// are counted, and the account is locked when the count strictly
    /// exceeds `max_failed_attempts`; exactly at the threshold it stays
    /// open.
    ///
    /// The successful-authentication query is capped at the store's query
    /// limit, so an account with deeper success history than the cap is
    /// judged against the oldest capped slice. That widens the window and
    /// over-counts failures, never the reverse.
    ///
    /// Storage errors propagate to the caller; an unreadable history never
    /// silently reports "not locked".
    ///
    /// # Arguments
    ///
    /// * `account_id` - The account to evaluate
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The account is locked
    /// * `Ok(false)` - The account may authenticate
    /// * `Err(DomainError)` - The event history could not be read
    pub async fn is_locked(&self, account_id: Uuid) -> DomainResult<bool> {
        let now = Utc::now().timestamp();
        let horizon = now - Duration::days(self.config.lookback_days).num_seconds();

        let successes = self
            .events
            .find_by_account_and_type(account_id, AuthEventType::SuccessfulAuthentication, None)
            .await?;

        let window_start = match successes.last() {
            Some(latest) => latest.occurred_at.max(horizon),
            None => horizon,
        };

        let failures = self
            .events
            .find_by_account_and_type(
                account_id,
                AuthEventType::FailedLoginAttempt,
                Some(TimeRange {
                    after: window_start,
                    before: now,
                }),
            )
            .await?;

        let locked = failures.len() > self.config.max_failed_attempts;
        if locked {
            warn!(
                account_id = %account_id,
                failed_attempts = failures.len(),
                threshold = self.config.max_failed_attempts,
                "Account locked: too many failed login attempts"
            );
        } else {
            debug!(
                account_id = %account_id,
                failed_attempts = failures.len(),
                "Lockout check passed"
            );
        }

        Ok(locked)
    }
}
