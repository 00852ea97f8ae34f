//! Account repository trait defining the interface for credential persistence.
//!
//! The backing store enforces no uniqueness constraint on email, so the
//! lookup reports how many rows matched instead of pretending at-most-one
//! exists. Callers decide what multiple matches mean for their flow.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Outcome of an email lookup against a store without a uniqueness constraint
#[derive(Debug, Clone, PartialEq)]
pub enum EmailMatches {
    /// No account carries this email
    None,
    /// Exactly one account matched
    One(Account),
    /// More than one account matched; carries the row count
    Many(usize),
}

/// Outcome of a conditional insert keyed on the account identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The row was written
    Inserted,
    /// A row with this identifier already existed; nothing was written
    AlreadyExists,
}

/// Repository trait for Account entity persistence operations
///
/// Implementations handle the actual database operations while keeping
/// the domain layer free of storage concerns.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use gate_core::domain::entities::account::Account;
/// use gate_core::errors::DomainError;
/// use gate_core::repositories::{AccountRepository, EmailMatches, InsertOutcome};
///
/// struct MySqlAccountRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl AccountRepository for MySqlAccountRepository {
///     async fn find_by_email(&self, email: &str) -> Result<EmailMatches, DomainError> {
///         // Implementation here
///         Ok(EmailMatches::None)
///     }
///
///     async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
///         Ok(None)
///     }
///
///     async fn insert_if_absent(&self, account: &Account) -> Result<InsertOutcome, DomainError> {
///         Ok(InsertOutcome::Inserted)
///     }
/// }
/// ```
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find accounts by email address
    ///
    /// # Arguments
    /// * `email` - The email to look up, matched exactly
    ///
    /// # Returns
    /// * `Ok(EmailMatches::None)` - No account with this email
    /// * `Ok(EmailMatches::One(account))` - Exactly one match
    /// * `Ok(EmailMatches::Many(count))` - Duplicate rows exist for this email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<EmailMatches, DomainError>;

    /// Find an account by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The account identifier
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with this identifier
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Insert an account if no row with its identifier exists.
    ///
    /// The condition covers the identifier only. Two accounts with
    /// different identifiers and the same email are both admitted;
    /// email uniqueness is the provisioning flow's responsibility.
    ///
    /// # Arguments
    /// * `account` - The account to persist
    ///
    /// # Returns
    /// * `Ok(InsertOutcome::Inserted)` - The row was written
    /// * `Ok(InsertOutcome::AlreadyExists)` - Identifier collision, nothing written
    /// * `Err(DomainError)` - Database or other error occurred
    async fn insert_if_absent(&self, account: &Account) -> Result<InsertOutcome, DomainError>;
}
