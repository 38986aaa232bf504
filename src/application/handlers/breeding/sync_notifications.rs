//! SyncNotificationsHandler - Command handler persisting derived
//! notifications for a farm, deduplicated against the store.

use std::sync::Arc;

use super::{GetNotificationsHandler, GetNotificationsQuery};
use crate::domain::cattle::BreedingError;
use crate::domain::foundation::FarmId;
use crate::ports::{Clock, HerdReader, NotificationStore};

/// Command to sync one farm's notifications into the store.
#[derive(Debug, Clone)]
pub struct SyncNotificationsCommand {
    pub farm_id: FarmId,
}

/// Result of a notification sync.
#[derive(Debug, Clone)]
pub struct SyncNotificationsResult {
    /// Notifications derived from the herd's current state.
    pub generated: usize,
    /// Notifications actually saved after deduplication.
    pub saved: usize,
}

/// Handler for the notification sync pass. A notification is saved only
/// when no stored entry, read or unread, carries the same kind-and-tag
/// key; repeated
/// runs on an unchanged herd save nothing.
pub struct SyncNotificationsHandler {
    notifications: GetNotificationsHandler,
    store: Arc<dyn NotificationStore>,
}

impl SyncNotificationsHandler {
    pub fn new(
        reader: Arc<dyn HerdReader>,
        clock: Arc<dyn Clock>,
        store: Arc<dyn NotificationStore>,
    ) -> Self {
        Self {
            notifications: GetNotificationsHandler::new(reader, clock),
            store,
        }
    }

    pub async fn handle(
        &self,
        cmd: SyncNotificationsCommand,
    ) -> Result<SyncNotificationsResult, BreedingError> {
        let notifications = self
            .notifications
            .handle(GetNotificationsQuery {
                farm_id: Some(cmd.farm_id),
            })
            .await?;

        let mut seen = self.store.existing_keys(&cmd.farm_id).await?;
        let mut saved = 0;
        for notification in &notifications {
            if seen.insert(notification.dedup_key()) {
                self.store.save(&cmd.farm_id, notification).await?;
                saved += 1;
            }
        }

        tracing::info!(
            farm_id = %cmd.farm_id,
            generated = notifications.len(),
            saved,
            "notification sync complete"
        );

        Ok(SyncNotificationsResult {
            generated: notifications.len(),
            saved,
        })
    }
}
