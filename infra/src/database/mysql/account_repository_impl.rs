//! MySQL implementation of the AccountRepository trait.
//!
//! This module provides the concrete implementation of account persistence
//! using MySQL database with SQLx. The accounts table carries no unique
//! index on email; the only uniqueness the store enforces is the primary
//! key on id.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use gate_core::domain::entities::account::Account;
use gate_core::errors::DomainError;
use gate_core::repositories::{AccountRepository, EmailMatches, InsertOutcome};

/// MySQL implementation of AccountRepository
///
/// Uses SQLx for database operations. The rights and jwt_payload columns
/// hold serialized JSON and are passed through opaquely.
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        let rights_json: String = row.try_get("rights").map_err(|e| DomainError::Internal {
            message: format!("Failed to get rights: {}", e),
        })?;
        let rights = serde_json::from_str(&rights_json).map_err(|e| DomainError::Internal {
            message: format!("Invalid rights JSON: {}", e),
        })?;

        let payload_json: String =
            row.try_get("jwt_payload").map_err(|e| DomainError::Internal {
                message: format!("Failed to get jwt_payload: {}", e),
            })?;
        let jwt_payload = serde_json::from_str(&payload_json).map_err(|e| {
            DomainError::Internal {
                message: format!("Invalid jwt_payload JSON: {}", e),
            }
        })?;

        Ok(Account {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid UUID: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            first_name: row.try_get("first_name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get first_name: {}", e),
            })?,
            last_name: row.try_get("last_name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get last_name: {}", e),
            })?,
            age: row.try_get("age").map_err(|e| DomainError::Internal {
                message: format!("Failed to get age: {}", e),
            })?,
            rights,
            jwt_payload,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<EmailMatches, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, first_name, last_name,
                   age, rights, jwt_payload, created_at
            FROM accounts
            WHERE email = ?
            ORDER BY created_at ASC
        "#;

        let rows = sqlx::query(query)
            .bind(email)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to query accounts by email: {}", e),
            })?;

        match rows.len() {
            0 => Ok(EmailMatches::None),
            1 => Ok(EmailMatches::One(Self::row_to_account(&rows[0])?)),
            n => Ok(EmailMatches::Many(n)),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, first_name, last_name,
                   age, rights, jwt_payload, created_at
            FROM accounts
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to query account by id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert_if_absent(&self, account: &Account) -> Result<InsertOutcome, DomainError> {
        let rights_json =
            serde_json::to_string(&account.rights).map_err(|e| DomainError::Internal {
                message: format!("Failed to serialize rights: {}", e),
            })?;
        let payload_json =
            serde_json::to_string(&account.jwt_payload).map_err(|e| DomainError::Internal {
                message: format!("Failed to serialize jwt_payload: {}", e),
            })?;

        let query = r#"
            INSERT INTO accounts (
                id, email, password_hash, first_name, last_name,
                age, rights, jwt_payload, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(account.age)
            .bind(rights_json)
            .bind(payload_json)
            .bind(account.created_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            // Primary key collision on id; email carries no unique index.
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Ok(InsertOutcome::AlreadyExists)
            }
            Err(e) => Err(DomainError::Internal {
                message: format!("Failed to insert account: {}", e),
            }),
        }
    }
}
