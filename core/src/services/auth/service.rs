//! Main authentication service implementation

use std::sync::Arc;

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::entities::auth_event::{AuthEvent, AuthEventType};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::account::{AccountRepository, EmailMatches};
use crate::repositories::event::AuthEventRepository;
use crate::services::lockout::SuspiciousActivityDetector;
use crate::services::password::PasswordHasherTrait;

/// Authentication service for the password login flow
pub struct AuthService<A, E, H>
where
    A: AccountRepository,
    E: AuthEventRepository,
    H: PasswordHasherTrait,
{
    /// Account repository for credential lookups
    accounts: Arc<A>,
    /// Event store for the authentication audit trail
    events: Arc<E>,
    /// Lockout detector evaluated before every password comparison
    detector: SuspiciousActivityDetector<E>,
    /// Password hasher for verification
    hasher: Arc<H>,
}

impl<A, E, H> AuthService<A, E, H>
where
    A: AccountRepository,
    E: AuthEventRepository,
    H: PasswordHasherTrait,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `accounts` - Repository for account persistence
    /// * `events` - Event store shared with the detector
    /// * `detector` - Lockout detector over the same event store
    /// * `hasher` - Password hasher
    pub fn new(
        accounts: Arc<A>,
        events: Arc<E>,
        detector: SuspiciousActivityDetector<E>,
        hasher: Arc<H>,
    ) -> Self {
        Self {
            accounts,
            events,
            detector,
            hasher,
        }
    }

    /// Authenticate an account by email and password
    ///
    /// This method:
    /// 1. Rejects empty credentials before touching storage
    /// 2. Resolves the account by email; unknown emails fail exactly like
    ///    wrong passwords, and no event is written (there is no account to
    ///    attach one to)
    /// 3. Evaluates the lockout decision before comparing the password, so
    ///    a locked account learns nothing about whether its password was
    ///    correct
    /// 4. Compares the password against the stored hash
    /// 5. Records the outcome as an event; a failed write is logged but
    ///    never changes the result already computed
    ///
    /// # Arguments
    ///
    /// * `email` - The account email
    /// * `password` - The plaintext password to check
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - Authentication succeeded
    /// * `Err(DomainError)` - `AuthenticationFailure`, `AccountLocked`, or an
    ///   internal error from a collaborator
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::sync::Arc;
    /// use gate_core::repositories::{MockAccountRepository, MockAuthEventRepository};
    /// use gate_core::services::auth::AuthService;
    /// use gate_core::services::lockout::SuspiciousActivityDetector;
    /// use gate_core::services::password::BcryptPasswordHasher;
    ///
    /// async fn login() {
    ///     let accounts = Arc::new(MockAccountRepository::new());
    ///     let events = Arc::new(MockAuthEventRepository::new());
    ///     let detector = SuspiciousActivityDetector::with_defaults(events.clone());
    ///     let hasher = Arc::new(BcryptPasswordHasher::new());
    ///     let service = AuthService::new(accounts, events, detector, hasher);
    ///
    ///     match service.authenticate("jane@example.com", "correct-horse").await {
    ///         Ok(account) => println!("Welcome back, {}", account.first_name),
    ///         Err(e) => eprintln!("Authentication failed: {}", e),
    ///     }
    /// }
    /// ```
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<Account> {
        // Step 1: Fail fast on empty credentials, before any storage access
        if !gate_shared::validation::not_empty(email) || password.is_empty() {
            debug!("Authentication rejected: empty credentials");
            return Err(DomainError::Auth(AuthError::AuthenticationFailure));
        }

        // Step 2: Resolve the account by email
        let account = match self.accounts.find_by_email(email).await? {
            EmailMatches::None => {
                // Indistinguishable from a wrong password at the boundary
                debug!("Authentication rejected: no matching account");
                return Err(DomainError::Auth(AuthError::AuthenticationFailure));
            }
            EmailMatches::One(account) => account,
            EmailMatches::Many(count) => {
                // Duplicate rows share this email. Identity is ambiguous,
                // so no password check happens until that is repaired.
                error!(
                    matches = count,
                    "Authentication rejected: email resolves to multiple accounts"
                );
                return Err(DomainError::Internal {
                    message: format!("email resolves to {} accounts", count),
                });
            }
        };

        // Step 3: Lockout check runs before the password comparison
        if self.detector.is_locked(account.id).await? {
            self.record_event(AuthEvent::new(account.id, AuthEventType::FailedLoginAttempt))
                .await;
            warn!(account_id = %account.id, "Authentication blocked: account locked");
            return Err(DomainError::Auth(AuthError::AccountLocked));
        }

        // Step 4: Compare the password against the stored hash
        let matches = self.hasher.verify(password, &account.password_hash).await?;

        // Step 5: Record the outcome and return the decision
        if matches {
            self.record_event(AuthEvent::new(
                account.id,
                AuthEventType::SuccessfulAuthentication,
            ))
            .await;
            info!(account_id = %account.id, "Authentication succeeded");
            Ok(account)
        } else {
            self.record_event(AuthEvent::new(account.id, AuthEventType::FailedLoginAttempt))
                .await;
            warn!(account_id = %account.id, "Authentication failed: password mismatch");
            Err(DomainError::Auth(AuthError::AuthenticationFailure))
        }
    }

    /// Resolve an account for a caller holding an already-verified identity.
    ///
    /// No password is checked. The lookup still fails with
    /// `AuthenticationFailure` when the identifier does not resolve, and
    /// every successful resolution is recorded as an `account_accessed`
    /// event so privileged reads stay accountable.
    ///
    /// # Arguments
    ///
    /// * `account_id` - Identifier taken from a verified token claim
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The resolved account
    /// * `Err(DomainError)` - `AuthenticationFailure` if unresolved, or an
    ///   internal error from the store
    pub async fn authenticate_by_trusted_id(&self, account_id: Uuid) -> DomainResult<Account> {
        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::AuthenticationFailure))?;

        self.record_event(AuthEvent::new(account.id, AuthEventType::AccountAccessed))
            .await;
        debug!(account_id = %account.id, "Account resolved from trusted identifier");
        Ok(account)
    }

    /// Append an audit event, logging a failure without propagating it.
    ///
    /// The authentication result stands on its own; losing one event
    /// degrades the lockout approximation but must not turn a computed
    /// success into an error.
    async fn record_event(&self, event: AuthEvent) {
        if let Err(e) = self.events.append(&event).await {
            error!(
                account_id = %event.account_id,
                event_type = event.event_type.as_str(),
                error = %e,
                "Failed to record authentication event"
            );
        }
    }
}
