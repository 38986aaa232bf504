//! Pregnancy progress calculation.
//!
//! Pure date arithmetic over a cow's breeding record; `today` is injected
//! so the math is reproducible in tests.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::cow::Cow;
use crate::domain::foundation::{days_between, round_one_decimal, DateWindow};

/// Bovine gestation length: fixed 283 days from insemination to expected
/// calving.
pub const GESTATION_DAYS: u64 = 283;

/// Days into the gestation at which the final month (9th month) begins.
pub const FINAL_MONTH_START_DAYS: u64 = 253;

/// Derived pregnancy status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PregnancyStatus {
    Pregnant,
    Calved,
    Overdue,
    DueSoon,
}

/// Progress snapshot for a pregnant (or recently calved) cow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PregnancyProgress {
    pub status: PregnancyStatus,
    pub last_insemination_date: NaiveDate,
    pub expected_calving_date: NaiveDate,
    pub actual_calving_date: Option<NaiveDate>,
    pub days_since_insemination: i64,
    /// Signed distance to the expected calving date; overdue is negative.
    pub days_until_calving: i64,
    /// Clamped to `[0, 100]`, one decimal place.
    pub progress_percentage: f64,
    pub total_gestation_days: i64,
}

/// Computes pregnancy progress for a cow, or `None` when no insemination
/// date is set.
pub fn pregnancy_progress(cow: &Cow, today: NaiveDate) -> Option<PregnancyProgress> {
    let insemination_date = cow.last_insemination_date?;

    let days_since_insemination = days_between(insemination_date, today);
    let expected_calving_date = cow
        .expected_calving_date
        .unwrap_or_else(|| expected_calving(insemination_date));
    let days_until_calving = days_between(today, expected_calving_date);

    let progress = days_since_insemination as f64 / GESTATION_DAYS as f64 * 100.0;
    let progress_percentage = round_one_decimal(progress.clamp(0.0, 100.0));

    let status = if cow.actual_calving_date.is_some() {
        PregnancyStatus::Calved
    } else if days_until_calving < 0 {
        PregnancyStatus::Overdue
    } else if days_until_calving <= 14 {
        PregnancyStatus::DueSoon
    } else {
        PregnancyStatus::Pregnant
    };

    Some(PregnancyProgress {
        status,
        last_insemination_date: insemination_date,
        expected_calving_date,
        actual_calving_date: cow.actual_calving_date,
        days_since_insemination,
        days_until_calving,
        progress_percentage,
        total_gestation_days: GESTATION_DAYS as i64,
    })
}

/// Expected calving date for an insemination date.
pub fn expected_calving(insemination_date: NaiveDate) -> NaiveDate {
    insemination_date + Days::new(GESTATION_DAYS)
}

/// Insemination-date window covering the final month of gestation: cows
/// calving today were inseminated 283 days ago, cows entering the 9th
/// month 253 days ago. Bounds inclusive.
pub fn final_month_window(today: NaiveDate) -> DateWindow {
    DateWindow::new(
        today - Days::new(GESTATION_DAYS),
        today - Days::new(FINAL_MONTH_START_DAYS),
    )
}
