//! MySQL implementation of the AuthEventRepository trait.
//!
//! This module provides the concrete implementation of authentication event
//! persistence using MySQL database with SQLx. The auth_events table is
//! append-only; rows are never updated or deleted by the service.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use gate_core::domain::entities::auth_event::{AuthEvent, AuthEventType};
use gate_core::errors::DomainError;
use gate_core::repositories::{AuthEventRepository, TimeRange, EVENT_QUERY_LIMIT};

/// MySQL implementation of AuthEventRepository
pub struct MySqlAuthEventRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAuthEventRepository {
    /// Create a new MySQL auth event repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to AuthEvent entity
    fn row_to_event(row: &sqlx::mysql::MySqlRow) -> Result<AuthEvent, DomainError> {
        let event_id: String = row.try_get("event_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get event_id: {}", e),
        })?;

        let account_id: String = row
            .try_get("account_id")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get account_id: {}", e),
            })?;

        let event_type_str: String =
            row.try_get("event_type").map_err(|e| DomainError::Internal {
                message: format!("Failed to get event_type: {}", e),
            })?;

        let event_type =
            AuthEventType::from_str(&event_type_str).ok_or_else(|| DomainError::Internal {
                message: format!("Unknown event type: {}", event_type_str),
            })?;

        let metadata_json: Option<String> =
            row.try_get("metadata").map_err(|e| DomainError::Internal {
                message: format!("Failed to get metadata: {}", e),
            })?;

        let metadata = metadata_json
            .map(|m| serde_json::from_str(&m))
            .transpose()
            .map_err(|e| DomainError::Internal {
                message: format!("Invalid metadata JSON: {}", e),
            })?;

        Ok(AuthEvent {
            event_id: Uuid::parse_str(&event_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid event UUID: {}", e),
            })?,
            account_id: Uuid::parse_str(&account_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid account UUID: {}", e),
            })?,
            event_type,
            occurred_at: row.try_get("occurred_at").map_err(|e| DomainError::Internal {
                message: format!("Failed to get occurred_at: {}", e),
            })?,
            metadata,
        })
    }
}

#[async_trait]
impl AuthEventRepository for MySqlAuthEventRepository {
    async fn append(&self, event: &AuthEvent) -> Result<(), DomainError> {
        let metadata_json = event
            .metadata
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to serialize metadata: {}", e),
            })?;

        let query = r#"
            INSERT INTO auth_events (
                event_id, account_id, event_type, occurred_at, metadata
            ) VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(event.event_id.to_string())
            .bind(event.account_id.to_string())
            .bind(event.event_type.as_str())
            .bind(event.occurred_at)
            .bind(metadata_json)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            // The row with this event_id is already there; a retried
            // append changes nothing.
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Ok(()),
            Err(e) => Err(DomainError::Internal {
                message: format!("Failed to append auth event: {}", e),
            }),
        }
    }

    async fn find_by_account_and_type(
        &self,
        account_id: Uuid,
        event_type: AuthEventType,
        range: Option<TimeRange>,
    ) -> Result<Vec<AuthEvent>, DomainError> {
        let rows = match range {
            Some(range) => {
                let query = r#"
                    SELECT event_id, account_id, event_type, occurred_at, metadata
                    FROM auth_events
                    WHERE account_id = ? AND event_type = ?
                      AND occurred_at > ? AND occurred_at < ?
                    ORDER BY occurred_at ASC
                    LIMIT ?
                "#;

                sqlx::query(query)
                    .bind(account_id.to_string())
                    .bind(event_type.as_str())
                    .bind(range.after)
                    .bind(range.before)
                    .bind(EVENT_QUERY_LIMIT as i64)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = r#"
                    SELECT event_id, account_id, event_type, occurred_at, metadata
                    FROM auth_events
                    WHERE account_id = ? AND event_type = ?
                    ORDER BY occurred_at ASC
                    LIMIT ?
                "#;

                sqlx::query(query)
                    .bind(account_id.to_string())
                    .bind(event_type.as_str())
                    .bind(EVENT_QUERY_LIMIT as i64)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to query auth events: {}", e),
        })?;

        rows.iter().map(Self::row_to_event).collect()
    }
}
