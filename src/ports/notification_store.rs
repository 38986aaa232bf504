//! Notification store port.
//!
//! Durable delivery target for derived notifications. Deduplication is
//! key-based: the sync pass asks for the keys already present and only
//! saves notifications whose key is new.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, FarmId};
use crate::domain::notification::Notification;

/// A persisted notification.
#[derive(Debug, Clone)]
pub struct StoredNotification {
    pub id: Uuid,
    pub farm_id: FarmId,
    pub notification: Notification,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Durable notification storage, farm-scoped.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Deduplication keys of every notification stored for the farm,
    /// read or unread.
    async fn existing_keys(&self, farm_id: &FarmId) -> Result<HashSet<String>, DomainError>;

    async fn save(
        &self,
        farm_id: &FarmId,
        notification: &Notification,
    ) -> Result<(), DomainError>;

    /// Unread notifications for a farm, newest first.
    async fn unread(&self, farm_id: &FarmId) -> Result<Vec<StoredNotification>, DomainError>;

    async fn unread_count(&self, farm_id: &FarmId) -> Result<u64, DomainError>;

    async fn mark_read(&self, id: &Uuid) -> Result<(), DomainError>;
}
