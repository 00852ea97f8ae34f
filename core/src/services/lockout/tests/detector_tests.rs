//! Unit tests for the suspicious activity detector
//!
//! Events are seeded with explicit timestamps relative to the current
//! time. The decision window is exclusive at `now`, so seeding in the
//! past keeps every event visible to the detector.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::auth_event::{AuthEvent, AuthEventType};
use crate::repositories::event::{MockAuthEventRepository, EVENT_QUERY_LIMIT};
use crate::services::lockout::{LockoutConfig, SuspiciousActivityDetector};

fn days(n: i64) -> i64 {
    Duration::days(n).num_seconds()
}

fn failure_at(account_id: Uuid, occurred_at: i64) -> AuthEvent {
    AuthEvent::new(account_id, AuthEventType::FailedLoginAttempt).with_timestamp(occurred_at)
}

fn success_at(account_id: Uuid, occurred_at: i64) -> AuthEvent {
    AuthEvent::new(account_id, AuthEventType::SuccessfulAuthentication).with_timestamp(occurred_at)
}

fn seed_failures(repo: &MockAuthEventRepository, account_id: Uuid, from: i64, count: usize) {
    for i in 0..count {
        repo.seed(failure_at(account_id, from + i as i64));
    }
}

fn detector(repo: &Arc<MockAuthEventRepository>) -> SuspiciousActivityDetector<MockAuthEventRepository> {
    SuspiciousActivityDetector::with_defaults(repo.clone())
}

#[tokio::test]
async fn test_no_history_is_not_locked() {
    let repo = Arc::new(MockAuthEventRepository::new());

    assert!(!detector(&repo).is_locked(Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn test_exactly_threshold_failures_do_not_lock() {
    let repo = Arc::new(MockAuthEventRepository::new());
    let account_id = Uuid::new_v4();
    let now = Utc::now().timestamp();

    seed_failures(&repo, account_id, now - 100, 10);

    assert!(!detector(&repo).is_locked(account_id).await.unwrap());
}

#[tokio::test]
async fn test_one_past_threshold_locks() {
    let repo = Arc::new(MockAuthEventRepository::new());
    let account_id = Uuid::new_v4();
    let now = Utc::now().timestamp();

    seed_failures(&repo, account_id, now - 100, 11);

    assert!(detector(&repo).is_locked(account_id).await.unwrap());
}

#[tokio::test]
async fn test_success_after_failures_clears_the_slate() {
    let repo = Arc::new(MockAuthEventRepository::new());
    let account_id = Uuid::new_v4();
    let now = Utc::now().timestamp();

    seed_failures(&repo, account_id, now - 500, 11);
    repo.seed(success_at(account_id, now - 100));

    assert!(!detector(&repo).is_locked(account_id).await.unwrap());
}

#[tokio::test]
async fn test_failures_after_latest_success_still_count() {
    let repo = Arc::new(MockAuthEventRepository::new());
    let account_id = Uuid::new_v4();
    let now = Utc::now().timestamp();

    repo.seed(success_at(account_id, now - 1_000));
    seed_failures(&repo, account_id, now - 500, 11);

    assert!(detector(&repo).is_locked(account_id).await.unwrap());
}

#[tokio::test]
async fn test_failures_older_than_lookback_are_ignored() {
    let repo = Arc::new(MockAuthEventRepository::new());
    let account_id = Uuid::new_v4();
    let now = Utc::now().timestamp();

    seed_failures(&repo, account_id, now - days(91), 11);

    assert!(!detector(&repo).is_locked(account_id).await.unwrap());
}

#[tokio::test]
async fn test_stale_success_does_not_narrow_the_window() {
    // A success older than the lookback horizon leaves the horizon in
    // charge; recent failures inside it still lock.
    let repo = Arc::new(MockAuthEventRepository::new());
    let account_id = Uuid::new_v4();
    let now = Utc::now().timestamp();

    repo.seed(success_at(account_id, now - days(100)));
    seed_failures(&repo, account_id, now - days(10), 11);

    assert!(detector(&repo).is_locked(account_id).await.unwrap());
}

#[tokio::test]
async fn test_failure_at_window_start_is_excluded() {
    // The window opens exclusively at the latest success: a failure in
    // the same second as that success does not count, leaving exactly
    // the threshold inside the window.
    let repo = Arc::new(MockAuthEventRepository::new());
    let account_id = Uuid::new_v4();
    let now = Utc::now().timestamp();
    let success_ts = now - 200;

    repo.seed(success_at(account_id, success_ts));
    repo.seed(failure_at(account_id, success_ts));
    seed_failures(&repo, account_id, success_ts + 1, 10);

    assert!(!detector(&repo).is_locked(account_id).await.unwrap());
}

#[tokio::test]
async fn test_other_event_types_do_not_count() {
    let repo = Arc::new(MockAuthEventRepository::new());
    let account_id = Uuid::new_v4();
    let now = Utc::now().timestamp();

    for i in 0..20 {
        repo.seed(
            AuthEvent::new(account_id, AuthEventType::AccountAccessed).with_timestamp(now - 100 + i),
        );
    }
    repo.seed(AuthEvent::new(account_id, AuthEventType::AccountCreated).with_timestamp(now - 50));

    assert!(!detector(&repo).is_locked(account_id).await.unwrap());
}

#[tokio::test]
async fn test_accounts_are_judged_independently() {
    let repo = Arc::new(MockAuthEventRepository::new());
    let noisy = Uuid::new_v4();
    let quiet = Uuid::new_v4();
    let now = Utc::now().timestamp();

    seed_failures(&repo, noisy, now - 100, 11);

    let detector = detector(&repo);
    assert!(detector.is_locked(noisy).await.unwrap());
    assert!(!detector.is_locked(quiet).await.unwrap());
}

#[tokio::test]
async fn test_storage_errors_propagate() {
    let repo = Arc::new(MockAuthEventRepository::new());
    repo.set_fail_queries(true);

    assert!(detector(&repo).is_locked(Uuid::new_v4()).await.is_err());
}

#[tokio::test]
async fn test_custom_threshold_applies() {
    let repo = Arc::new(MockAuthEventRepository::new());
    let account_id = Uuid::new_v4();
    let now = Utc::now().timestamp();

    seed_failures(&repo, account_id, now - 100, 4);

    let detector = SuspiciousActivityDetector::new(
        repo.clone(),
        LockoutConfig::default().with_max_failed_attempts(3),
    );
    assert!(detector.is_locked(account_id).await.unwrap());
}

#[tokio::test]
async fn test_deep_success_history_uses_oldest_capped_slice() {
    // With more successes than the query cap, the capped (ascending)
    // query keeps the oldest rows, so the window opens at the last of
    // those rather than the true latest success. Failures between the
    // two are therefore counted.
    let repo = Arc::new(MockAuthEventRepository::new());
    let account_id = Uuid::new_v4();
    let now = Utc::now().timestamp();
    let base = now - 100_000;

    for i in 0..(EVENT_QUERY_LIMIT as i64 + 1) {
        repo.seed(success_at(account_id, base + i * 100));
    }
    // Capped latest success sits at base + 49_900; the true latest at
    // base + 50_000. Failures land strictly between the two.
    let capped_latest = base + (EVENT_QUERY_LIMIT as i64 - 1) * 100;
    seed_failures(&repo, account_id, capped_latest + 10, 11);

    assert!(detector(&repo).is_locked(account_id).await.unwrap());
}
