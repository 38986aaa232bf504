//! Post-calving breeding windows: insemination readiness classification,
//! next-period estimation, and the per-cow upcoming-calving entry.
//!
//! All functions here are pure; callers supply the records and `today`.
//! Missing linked records (no animal, no reference date) short-circuit to
//! `None` and are excluded from result sets, never treated as errors.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::animal::Animal;
use super::cow::Cow;
use super::insemination::{Insemination, InseminationStatus};
use super::pregnancy::{pregnancy_progress, PregnancyProgress, GESTATION_DAYS};
use crate::domain::foundation::{days_between, AnimalId, BullId, CowId, InseminationId};

/// Ideal insemination window: 50-90 days after calving.
pub const IDEAL_WINDOW_START: i64 = 50;
pub const IDEAL_WINDOW_END: i64 = 90;

/// Alert band around the ideal window: starts 5 days before it and extends
/// 5 days past it.
pub const ALERT_BAND_START: i64 = 45;
pub const ALERT_BAND_END: i64 = 95;

/// Days after a failed insemination before a retry is due.
pub const FAILED_RETRY_DAYS: i64 = 21;

/// Readiness classification for a cow's next insemination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    Ready,
    Approaching,
    Overdue,
}

/// Sire reference resolved through an insemination's bull record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SireRef {
    pub bull_id: BullId,
    pub tag_number: String,
    pub name: Option<String>,
}

/// Summary of a cow's most recent insemination attempt, carried on
/// readiness results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InseminationSummary {
    pub id: InseminationId,
    pub insemination_date: NaiveDate,
    pub status: InseminationStatus,
    pub notes: Option<String>,
    pub bull_id: Option<BullId>,
    pub sire: Option<SireRef>,
}

impl InseminationSummary {
    pub fn from_record(record: &Insemination, sire: Option<SireRef>) -> Self {
        Self {
            id: record.id,
            insemination_date: record.insemination_date,
            status: record.status,
            notes: record.notes.clone(),
            bull_id: record.bull_id,
            sire,
        }
    }
}

/// One row of the upcoming-calvings listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingCalving {
    pub cow_id: CowId,
    pub animal_id: AnimalId,
    pub tag_number: String,
    pub name: Option<String>,
    pub last_insemination_date: NaiveDate,
    /// Stored value only; `None` when the cow never had it persisted.
    pub expected_calving_date: Option<NaiveDate>,
    /// Days until expected calving, floored at 0.
    pub days_remaining: i64,
    pub days_since_insemination: i64,
    pub progress: PregnancyProgress,
}

/// Builds the upcoming-calvings entry for one cow, or `None` when the cow
/// has no associated animal or no insemination date.
pub fn upcoming_calving(cow: &Cow, animal: Option<&Animal>, today: NaiveDate) -> Option<UpcomingCalving> {
    let animal = animal?;
    let insemination_date = cow.last_insemination_date?;

    let days_since_insemination = days_between(insemination_date, today);
    let days_remaining = match cow.expected_calving_date {
        Some(expected) => days_between(today, expected),
        None => GESTATION_DAYS as i64 - days_since_insemination,
    };
    let progress = pregnancy_progress(cow, today)?;

    Some(UpcomingCalving {
        cow_id: cow.id,
        animal_id: *animal.id(),
        tag_number: animal.tag_number().to_string(),
        name: animal.name().map(String::from),
        last_insemination_date: insemination_date,
        expected_calving_date: cow.expected_calving_date,
        days_remaining: days_remaining.max(0),
        days_since_insemination,
        progress,
    })
}

/// One row of the cows-needing-insemination listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InseminationReadiness {
    pub cow_id: CowId,
    pub animal_id: AnimalId,
    pub tag_number: String,
    pub name: Option<String>,
    pub last_calving_date: NaiveDate,
    pub days_since_calving: i64,
    /// Days until the ideal window opens; negative once inside or past it.
    /// Consumers clamp at 0 for display.
    pub days_until_ideal: i64,
    pub is_overdue: bool,
    pub status: ReadinessStatus,
    pub latest_insemination: Option<InseminationSummary>,
}

/// Classifies a calved, open cow against the insemination alert band.
///
/// Returns `None` for cows outside the band (and not overdue), cows that
/// are not open for breeding, and cows without an animal record.
///
/// The failed-retry exception: when the most recent insemination failed and
/// at least [`FAILED_RETRY_DAYS`] have elapsed since its date, the cow is
/// force-included as `Ready` regardless of the normal window.
pub fn insemination_readiness(
    cow: &Cow,
    animal: Option<&Animal>,
    latest_insemination: Option<&Insemination>,
    latest_sire: Option<SireRef>,
    today: NaiveDate,
) -> Option<InseminationReadiness> {
    let animal = animal?;
    let last_calving_date = cow.last_calving_date?;
    if !cow.is_open_for_breeding() {
        return None;
    }

    let days_since_calving = days_between(last_calving_date, today);
    let retry_due = failed_retry_due(latest_insemination, today);

    let is_overdue = days_since_calving > IDEAL_WINDOW_END;
    let in_alert_band =
        days_since_calving >= ALERT_BAND_START && days_since_calving <= ALERT_BAND_END;

    if !in_alert_band && !is_overdue && !retry_due {
        return None;
    }

    let summary = latest_insemination.map(|record| InseminationSummary::from_record(record, latest_sire));

    let (status, is_overdue, days_until_ideal) = if retry_due {
        // Ready for retry immediately; the normal window does not apply.
        (ReadinessStatus::Ready, false, 0)
    } else {
        let status = if is_overdue {
            ReadinessStatus::Overdue
        } else if days_since_calving >= ALERT_BAND_START {
            ReadinessStatus::Ready
        } else {
            ReadinessStatus::Approaching
        };
        (status, is_overdue, IDEAL_WINDOW_START - days_since_calving)
    };

    Some(InseminationReadiness {
        cow_id: cow.id,
        animal_id: *animal.id(),
        tag_number: animal.tag_number().to_string(),
        name: animal.name().map(String::from),
        last_calving_date,
        days_since_calving,
        days_until_ideal,
        is_overdue,
        status,
        latest_insemination: summary,
    })
}

/// True when the latest insemination failed and the retry wait has elapsed.
pub fn failed_retry_due(latest_insemination: Option<&Insemination>, today: NaiveDate) -> bool {
    matches!(
        latest_insemination,
        Some(record)
            if record.status == InseminationStatus::Failed
                && days_between(record.insemination_date, today) >= FAILED_RETRY_DAYS
    )
}

/// Next-insemination-period descriptor for one cow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextInseminationPeriod {
    pub last_calving_date: NaiveDate,
    pub days_since_calving: i64,
    pub ideal_start_days: i64,
    pub ideal_end_days: i64,
    /// Clamped at 0 once the window has opened.
    pub days_until_ideal_start: i64,
    /// Unclamped; negative once the window has closed.
    pub days_until_ideal_end: i64,
    pub is_in_window: bool,
    pub is_past_window: bool,
    pub is_before_window: bool,
    pub next_insemination_date: NaiveDate,
    pub status: ReadinessStatus,
}

/// Estimates the next insemination period for a cow that has calved and is
/// not currently pregnant; `None` otherwise.
pub fn next_insemination_period(
    cow: &Cow,
    latest_insemination: Option<&Insemination>,
    today: NaiveDate,
) -> Option<NextInseminationPeriod> {
    let last_calving_date = cow.last_calving_date?;
    if cow.last_insemination_date.is_some() {
        return None;
    }

    let days_since_calving = days_between(last_calving_date, today);

    if failed_retry_due(latest_insemination, today) {
        // Retry is due now; all offsets collapse to zero.
        return Some(NextInseminationPeriod {
            last_calving_date,
            days_since_calving,
            ideal_start_days: 0,
            ideal_end_days: 0,
            days_until_ideal_start: 0,
            days_until_ideal_end: 0,
            is_in_window: true,
            is_past_window: false,
            is_before_window: false,
            next_insemination_date: today,
            status: ReadinessStatus::Ready,
        });
    }

    let is_in_window =
        days_since_calving >= IDEAL_WINDOW_START && days_since_calving <= IDEAL_WINDOW_END;
    let is_past_window = days_since_calving > IDEAL_WINDOW_END;
    let is_before_window = days_since_calving < IDEAL_WINDOW_START;

    let status = if is_past_window {
        ReadinessStatus::Overdue
    } else if is_before_window {
        ReadinessStatus::Approaching
    } else {
        ReadinessStatus::Ready
    };

    Some(NextInseminationPeriod {
        last_calving_date,
        days_since_calving,
        ideal_start_days: IDEAL_WINDOW_START,
        ideal_end_days: IDEAL_WINDOW_END,
        days_until_ideal_start: (IDEAL_WINDOW_START - days_since_calving).max(0),
        days_until_ideal_end: IDEAL_WINDOW_END - days_since_calving,
        is_in_window,
        is_past_window,
        is_before_window,
        next_insemination_date: last_calving_date + Days::new(IDEAL_WINDOW_START as u64),
        status,
    })
}
