//! Cattle domain - breeding cycle model and calculations.
//!
//! The breeding cycle turns on two fixed intervals: the 283-day gestation
//! from insemination to expected calving, and the 50-90-day post-calving
//! window considered ideal for re-breeding. Everything in this module is
//! pure; persistence and "now" are injected through the ports.

mod animal;
mod breeding;
mod bull;
mod calving;
mod cow;
mod errors;
mod insemination;
mod pregnancy;
mod recording;
mod routine;
mod vitals;

pub use animal::{
    Animal, AnimalDetail, AnimalKind, CattleRole, CattleType, Gender, HorseType, SheepType, Species,
};
pub use breeding::{
    failed_retry_due, insemination_readiness, next_insemination_period, upcoming_calving,
    InseminationReadiness, InseminationSummary, NextInseminationPeriod, ReadinessStatus, SireRef,
    UpcomingCalving, ALERT_BAND_END, ALERT_BAND_START, FAILED_RETRY_DAYS, IDEAL_WINDOW_END,
    IDEAL_WINDOW_START,
};
pub use bull::Bull;
pub use calving::{CalfSpec, Calving};
pub use cow::Cow;
pub use errors::BreedingError;
pub use insemination::{Insemination, InseminationStatus};
pub use pregnancy::{
    expected_calving, final_month_window, pregnancy_progress, PregnancyProgress, PregnancyStatus,
    FINAL_MONTH_START_DAYS, GESTATION_DAYS,
};
pub use recording::{
    becomes_latest_confirmed, plan_calving, plan_insemination, plan_status_update, CalvingPlan,
    InseminationPlan, NewCalf, NewInsemination, PendingDemotion, PregnancyConfirmation,
    StatusUpdatePlan,
};
pub use routine::{daily_routine, DailyRoutine, MilkingDetails};
pub use vitals::{
    weaning_eligibility, CattleVitals, VitalsMeasurements, WeaningEligibility,
    MAX_WEANING_AGE_MONTHS, MIN_WEANING_AGE_MONTHS,
};
