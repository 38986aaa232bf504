//! PostgreSQL implementation of NotificationStore.
//!
//! Notifications are stored denormalized: the classification columns
//! (kind, priority, dedup_key) support querying, the numeric payload
//! lives in a jsonb detail column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use std::collections::HashSet;
use uuid::Uuid;

use super::db_error;
use super::rows::column;
use crate::domain::foundation::{DomainError, ErrorCode, FarmId};
use crate::domain::notification::{Notification, NotificationKind, Priority};
use crate::ports::{NotificationStore, StoredNotification};

/// PostgreSQL implementation of NotificationStore.
#[derive(Clone)]
pub struct PostgresNotificationStore {
    pool: PgPool,
}

impl PostgresNotificationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationStore for PostgresNotificationStore {
    async fn existing_keys(&self, farm_id: &FarmId) -> Result<HashSet<String>, DomainError> {
        // Read notifications count too, so a dismissed alert does not
        // come straight back on the next sync.
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT dedup_key FROM notifications WHERE farm_id = $1")
        .bind(farm_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch notification keys", e))?;

        Ok(rows.into_iter().map(|(key,)| key).collect())
    }

    async fn save(
        &self,
        farm_id: &FarmId,
        notification: &Notification,
    ) -> Result<(), DomainError> {
        let detail = serde_json::to_value(&notification.detail)
            .map_err(|e| db_error("Failed to serialize notification detail", e))?;

        sqlx::query(
            r#"
            INSERT INTO notifications (
                id, farm_id, kind, priority, message, tag_number, name,
                detail, dedup_key, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, now())
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(farm_id.as_uuid())
        .bind(notification.kind.as_str())
        .bind(notification.priority.as_str())
        .bind(&notification.message)
        .bind(&notification.tag_number)
        .bind(&notification.name)
        .bind(detail)
        .bind(notification.dedup_key())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert notification", e))?;

        Ok(())
    }

    async fn unread(&self, farm_id: &FarmId) -> Result<Vec<StoredNotification>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM notifications
            WHERE farm_id = $1 AND read_at IS NULL
            ORDER BY created_at DESC
            "#,
        )
        .bind(farm_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch unread notifications", e))?;

        rows.into_iter().map(row_to_stored).collect()
    }

    async fn unread_count(&self, farm_id: &FarmId) -> Result<u64, DomainError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM notifications WHERE farm_id = $1 AND read_at IS NULL",
        )
        .bind(farm_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to count unread notifications", e))?;

        Ok(result.0 as u64)
    }

    async fn mark_read(&self, id: &Uuid) -> Result<(), DomainError> {
        sqlx::query("UPDATE notifications SET read_at = now() WHERE id = $1 AND read_at IS NULL")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to mark notification read", e))?;

        Ok(())
    }
}

fn str_to_kind(s: &str) -> Result<NotificationKind, DomainError> {
    match s {
        "calving_due_soon" => Ok(NotificationKind::CalvingDueSoon),
        "insemination_due" => Ok(NotificationKind::InseminationDue),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid notification kind: {}", s),
        )),
    }
}

fn str_to_priority(s: &str) -> Result<Priority, DomainError> {
    match s {
        "high" => Ok(Priority::High),
        "medium" => Ok(Priority::Medium),
        "low" => Ok(Priority::Low),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid notification priority: {}", s),
        )),
    }
}

fn row_to_stored(row: PgRow) -> Result<StoredNotification, DomainError> {
    let id: Uuid = column(&row, "id")?;
    let farm_id: Uuid = column(&row, "farm_id")?;
    let kind: String = column(&row, "kind")?;
    let priority: String = column(&row, "priority")?;
    let detail: serde_json::Value = column(&row, "detail")?;
    let read_at: Option<DateTime<Utc>> = column(&row, "read_at")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;

    Ok(StoredNotification {
        id,
        farm_id: FarmId::from_uuid(farm_id),
        notification: Notification {
            kind: str_to_kind(&kind)?,
            priority: str_to_priority(&priority)?,
            message: column(&row, "message")?,
            tag_number: column(&row, "tag_number")?,
            name: column(&row, "name")?,
            detail: serde_json::from_value(detail)
                .map_err(|e| db_error("Failed to deserialize notification detail", e))?,
        },
        read_at,
        created_at,
    })
}
