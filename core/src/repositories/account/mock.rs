//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

use super::r#trait::{AccountRepository, EmailMatches, InsertOutcome};

/// Mock account repository for testing.
///
/// Behaves like the real store by default: email lookups scan the map and
/// report every match, inserts are conditional on the identifier only.
/// Tests can script lookup results, force failures, or make inserted rows
/// invisible to reads to exercise the unhappy paths.
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
    scripted_lookups: Arc<RwLock<VecDeque<EmailMatches>>>,
    email_lookups: Arc<RwLock<usize>>,
    should_fail: Arc<RwLock<bool>>,
    hide_from_reads: Arc<RwLock<bool>>,
    collide_inserts: Arc<RwLock<bool>>,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            scripted_lookups: Arc::new(RwLock::new(VecDeque::new())),
            email_lookups: Arc::new(RwLock::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
            hide_from_reads: Arc::new(RwLock::new(false)),
            collide_inserts: Arc::new(RwLock::new(false)),
        }
    }

    /// Seed an account directly into the store
    pub async fn insert(&self, account: Account) {
        self.accounts.write().await.insert(account.id, account);
    }

    /// Set whether every operation should fail
    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    /// Queue a result for the next email lookup, bypassing the store.
    ///
    /// Queued results are consumed in order; once the queue is empty the
    /// lookup falls back to scanning the store. This lets a test replay
    /// the interleaving where two creators both observe no match.
    pub async fn script_email_lookup(&self, result: EmailMatches) {
        self.scripted_lookups.write().await.push_back(result);
    }

    /// Make identifier reads miss even for rows present in the store
    pub async fn set_hide_from_reads(&self, hide: bool) {
        *self.hide_from_reads.write().await = hide;
    }

    /// Make every insert report an identifier collision
    pub async fn set_collide_inserts(&self, collide: bool) {
        *self.collide_inserts.write().await = collide;
    }

    /// Number of email lookups performed so far
    pub async fn email_lookup_count(&self) -> usize {
        *self.email_lookups.read().await
    }

    /// Number of rows currently stored
    pub async fn stored_count(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// All stored accounts with the given email
    pub async fn stored_with_email(&self, email: &str) -> Vec<Account> {
        self.accounts
            .read()
            .await
            .values()
            .filter(|a| a.email == email)
            .cloned()
            .collect()
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<EmailMatches, DomainError> {
        *self.email_lookups.write().await += 1;

        if *self.should_fail.read().await {
            return Err(DomainError::Internal {
                message: "Mock repository error".to_string(),
            });
        }

        if let Some(scripted) = self.scripted_lookups.write().await.pop_front() {
            return Ok(scripted);
        }

        let accounts = self.accounts.read().await;
        let matches: Vec<&Account> = accounts.values().filter(|a| a.email == email).collect();
        match matches.len() {
            0 => Ok(EmailMatches::None),
            1 => Ok(EmailMatches::One(matches[0].clone())),
            n => Ok(EmailMatches::Many(n)),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::Internal {
                message: "Mock repository error".to_string(),
            });
        }

        if *self.hide_from_reads.read().await {
            return Ok(None);
        }

        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn insert_if_absent(&self, account: &Account) -> Result<InsertOutcome, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::Internal {
                message: "Mock repository error".to_string(),
            });
        }

        if *self.collide_inserts.read().await {
            return Ok(InsertOutcome::AlreadyExists);
        }

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.id) {
            return Ok(InsertOutcome::AlreadyExists);
        }
        accounts.insert(account.id, account.clone());
        Ok(InsertOutcome::Inserted)
    }
}
