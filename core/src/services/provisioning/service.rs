//! Account provisioning service implementation

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::entities::account::{Account, NewAccount};
use crate::domain::entities::auth_event::{AuthEvent, AuthEventType};
use crate::errors::{DomainError, DomainResult, ProvisioningError};
use crate::repositories::account::{AccountRepository, EmailMatches, InsertOutcome};
use crate::repositories::event::AuthEventRepository;
use crate::services::password::PasswordHasherTrait;

/// Service for creating new accounts
pub struct ProvisioningService<A, E, H>
where
    A: AccountRepository,
    E: AuthEventRepository,
    H: PasswordHasherTrait,
{
    /// Account repository for uniqueness checks and inserts
    accounts: Arc<A>,
    /// Event store receiving the creation event
    events: Arc<E>,
    /// Password hasher applied before anything is persisted
    hasher: Arc<H>,
}

impl<A, E, H> ProvisioningService<A, E, H>
where
    A: AccountRepository,
    E: AuthEventRepository,
    H: PasswordHasherTrait,
{
    /// Create a new provisioning service
    pub fn new(accounts: Arc<A>, events: Arc<E>, hasher: Arc<H>) -> Self {
        Self {
            accounts,
            events,
            hasher,
        }
    }

    /// Create a new account with a uniqueness guarantee on email.
    ///
    /// This method:
    /// 1. Validates the request; nothing below runs for malformed input
    /// 2. Checks that no account already carries the email
    /// 3. Hashes the password
    /// 4. Inserts the row, conditional on the freshly generated identifier
    /// 5. Reads the row back to obtain the store's canonical view
    /// 6. Records an `account_created` event
    ///
    /// Two concurrent calls for the same email can both pass step 2 before
    /// either reaches step 4, in which case both succeed and the store ends
    /// up with duplicate rows. Subsequent logins for that email are refused
    /// until the duplication is repaired.
    ///
    /// # Arguments
    ///
    /// * `request` - The validated-on-entry creation request
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The account as read back from the store
    /// * `Err(DomainError)` - A validation failure, `UserExists`, or
    ///   `FailedToCreateUser`. The last means "unknown final state": a row
    ///   may exist, and the caller must retry from the uniqueness check
    ///   rather than assume nothing was created.
    pub async fn create_account(&self, request: NewAccount) -> DomainResult<Account> {
        // Step 1: Validate before any storage access
        request.validate()?;

        // Step 2: Uniqueness check against current store contents
        match self
            .accounts
            .find_by_email(&request.email)
            .await
            .map_err(|e| creation_failed("uniqueness check", e))?
        {
            EmailMatches::None => {}
            EmailMatches::One(_) => {
                info!("Account creation rejected: email already registered");
                return Err(DomainError::Provisioning(ProvisioningError::UserExists));
            }
            EmailMatches::Many(count) => {
                // A prior uniqueness violation; creation must not compound it.
                warn!(
                    matches = count,
                    "Account creation rejected: email already maps to duplicate rows"
                );
                return Err(DomainError::Provisioning(ProvisioningError::UserExists));
            }
        }

        // Step 3: Hash the password
        let password_hash = self
            .hasher
            .hash(&request.password)
            .await
            .map_err(|e| creation_failed("password hashing", e))?;

        // Step 4: Insert, conditional on the new identifier only
        let account = Account::new(
            request.email,
            password_hash,
            request.first_name,
            request.last_name,
            request.age,
            request.rights,
            request.jwt_payload,
        );
        match self
            .accounts
            .insert_if_absent(&account)
            .await
            .map_err(|e| creation_failed("insert", e))?
        {
            InsertOutcome::Inserted => {}
            InsertOutcome::AlreadyExists => {
                return Err(creation_failed(
                    "insert",
                    DomainError::internal("identifier collision on insert"),
                ));
            }
        }

        // Step 5: Read back the canonical row
        let persisted = self
            .accounts
            .find_by_id(account.id)
            .await
            .map_err(|e| creation_failed("read-back", e))?
            .ok_or_else(|| {
                creation_failed("read-back", DomainError::internal("inserted row not found"))
            })?;

        // Step 6: Record the creation event. The event is recorded only for
        // a row provably persisted, and a failed write fails the call even
        // though the row stays in storage.
        self.events
            .append(&AuthEvent::new(persisted.id, AuthEventType::AccountCreated))
            .await
            .map_err(|e| creation_failed("creation event", e))?;

        info!(account_id = %persisted.id, "Account created");
        Ok(persisted)
    }
}

/// Normalize an internal failure to the coarse creation error, keeping the
/// cause in the logs only
fn creation_failed(step: &str, cause: DomainError) -> DomainError {
    error!(step = step, error = %cause, "Account creation failed");
    DomainError::Provisioning(ProvisioningError::FailedToCreateUser)
}
