//! Cattle care command and query handlers.

mod daily_routine;
mod record_vitals;
mod weaning;

pub use daily_routine::{DailyRoutineHandler, DailyRoutineQuery};
pub use record_vitals::{
    RecentVitalsHandler, RecentVitalsQuery, RecordVitalsCommand, RecordVitalsHandler,
};
pub use weaning::{WeaningEligibilityHandler, WeaningEligibilityQuery};
