//! GetNotificationsHandler - Query handler deriving the current breeding
//! notifications for a farm.

use std::sync::Arc;

use crate::domain::cattle::{final_month_window, upcoming_calving, BreedingError, UpcomingCalving};
use crate::domain::foundation::FarmId;
use crate::domain::notification::{
    calving_due_notifications, insemination_due_notification, sort_notifications, Notification,
};
use crate::ports::{Clock, HerdReader};

/// Query for the derived notification list.
#[derive(Debug, Clone)]
pub struct GetNotificationsQuery {
    /// `None` derives across all farms.
    pub farm_id: Option<FarmId>,
}

/// Handler deriving notifications from the herd's current state: calving
/// due entries from the final-month selection and insemination-due
/// entries from every calved-and-open cow. Results are sorted high
/// priority first, then by day count.
pub struct GetNotificationsHandler {
    reader: Arc<dyn HerdReader>,
    clock: Arc<dyn Clock>,
}

impl GetNotificationsHandler {
    pub fn new(reader: Arc<dyn HerdReader>, clock: Arc<dyn Clock>) -> Self {
        Self { reader, clock }
    }

    pub async fn handle(
        &self,
        query: GetNotificationsQuery,
    ) -> Result<Vec<Notification>, BreedingError> {
        let today = self.clock.today();
        let farm_id = query.farm_id.as_ref();

        let upcoming_records = self
            .reader
            .cows_in_final_month(final_month_window(today), farm_id)
            .await?;
        let upcoming: Vec<UpcomingCalving> = upcoming_records
            .iter()
            .filter_map(|record| upcoming_calving(&record.cow, record.animal.as_ref(), today))
            .collect();

        let mut notifications = calving_due_notifications(&upcoming);

        let eligible = self.reader.breeding_eligible_cows(farm_id).await?;
        notifications.extend(eligible.iter().filter_map(|record| {
            insemination_due_notification(
                &record.cow,
                record.animal.as_ref(),
                record.latest_insemination.as_ref(),
                today,
            )
        }));

        sort_notifications(&mut notifications);
        Ok(notifications)
    }
}
