//! Breeding-cycle command and query handlers.

mod cows_needing_insemination;
mod get_notifications;
mod next_insemination_period;
mod pregnancy_status;
mod record_calving;
mod record_insemination;
mod sync_notifications;
mod upcoming_calvings;
mod update_insemination_status;

pub use cows_needing_insemination::{
    CowsNeedingInseminationHandler, CowsNeedingInseminationQuery,
};
pub use get_notifications::{GetNotificationsHandler, GetNotificationsQuery};
pub use next_insemination_period::{NextInseminationPeriodHandler, NextInseminationPeriodQuery};
pub use pregnancy_status::{PregnancyStatusHandler, PregnancyStatusQuery};
pub use record_calving::{RecordCalvingCommand, RecordCalvingHandler, RecordCalvingResult};
pub use record_insemination::{
    RecordInseminationCommand, RecordInseminationHandler, RecordInseminationResult,
};
pub use sync_notifications::{
    SyncNotificationsCommand, SyncNotificationsHandler, SyncNotificationsResult,
};
pub use upcoming_calvings::{UpcomingCalvingsHandler, UpcomingCalvingsQuery};
pub use update_insemination_status::{
    UpdateInseminationStatusCommand, UpdateInseminationStatusHandler,
    UpdateInseminationStatusResult,
};
