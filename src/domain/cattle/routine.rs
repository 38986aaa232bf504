//! Daily care routines per cattle type.
//!
//! The per-type routines form a closed set, so they live in one match over
//! [`CattleType`] rather than behind an open-ended dispatch mechanism.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::animal::{Animal, CattleType};
use super::bull::Bull;
use super::cow::Cow;
use crate::domain::foundation::days_between;

/// Milking schedule details for lactating cows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilkingDetails {
    pub frequency: String,
    pub expected_yield_liters: f64,
}

/// One day's care routine for a cattle animal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRoutine {
    pub feeding: String,
    pub health_check: String,
    pub housing: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milking: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breeding_prep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_calving_care: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milking_details: Option<MilkingDetails>,
}

impl DailyRoutine {
    fn base(feeding: &str, health_check: &str, housing: &str, notes: &str) -> Self {
        Self {
            feeding: feeding.to_string(),
            health_check: health_check.to_string(),
            housing: housing.to_string(),
            notes: notes.to_string(),
            milking: None,
            exercise: None,
            stage: None,
            growth_stage: None,
            breeding_prep: None,
            safety: None,
            post_calving_care: None,
            milking_details: None,
        }
    }
}

/// Builds the daily routine for a cattle animal. The cow/bull breeding
/// record, when supplied, drives the condition-based adjustments.
pub fn daily_routine(
    cattle_type: CattleType,
    animal: &Animal,
    cow: Option<&Cow>,
    bull: Option<&Bull>,
    today: NaiveDate,
) -> DailyRoutine {
    match cattle_type {
        CattleType::Bull => bull_routine(bull),
        CattleType::Cow => cow_routine(cow, today),
        CattleType::Steer => steer_routine(animal, today),
        CattleType::Heifer => heifer_routine(animal, today),
    }
}

fn bull_routine(bull: Option<&Bull>) -> DailyRoutine {
    let mut routine = DailyRoutine::base(
        "High-protein feed (2-3% body weight)",
        "Check for injuries, aggression levels, and breeding fitness",
        "Secure, spacious pen with adequate ventilation",
        "Monitor semen quality and breeding performance",
    );
    routine.exercise = Some("Controlled exercise and breeding activity monitoring".to_string());

    if bull.and_then(|b| b.aggression_level.as_deref()) == Some("High") {
        routine.safety = Some("Extra safety precautions required".to_string());
    }

    routine
}

fn cow_routine(cow: Option<&Cow>, today: NaiveDate) -> DailyRoutine {
    let mut routine = DailyRoutine::base(
        "Balanced feed with minerals (2-3% body weight)",
        "Check udder health, body condition, and overall wellness",
        "Clean, comfortable milking parlor and resting area",
        "Monitor milk production and calving cycle",
    );
    routine.milking = Some("Twice daily milking schedule".to_string());

    if let Some(yield_liters) = cow.and_then(|c| c.milk_yield).filter(|y| *y > 0.0) {
        routine.milking_details = Some(MilkingDetails {
            frequency: "Twice daily".to_string(),
            expected_yield_liters: yield_liters,
        });
    }

    if let Some(last_calving) = cow.and_then(|c| c.last_calving_date) {
        if days_between(last_calving, today) < 60 {
            routine.post_calving_care =
                Some("Post-calving recovery period - monitor closely".to_string());
        }
    }

    routine
}

fn steer_routine(animal: &Animal, today: NaiveDate) -> DailyRoutine {
    let mut routine = DailyRoutine::base(
        "High-energy feed for weight gain (2.5-3.5% body weight)",
        "Monitor weight gain, feed conversion ratio, and overall health",
        "Group housing with adequate space per animal",
        "Focus on efficient weight gain and feed conversion",
    );
    routine.exercise = Some("Moderate exercise to maintain muscle tone".to_string());

    let age_in_months = animal.age_in_months(today).unwrap_or(0);
    if age_in_months < 12 {
        routine.feeding = "Growing feed with higher protein content".to_string();
        routine.growth_stage = Some("Early growth phase".to_string());
    } else if age_in_months < 24 {
        routine.feeding = "Finishing feed for optimal marbling".to_string();
        routine.growth_stage = Some("Finishing phase".to_string());
    }

    routine
}

fn heifer_routine(animal: &Animal, today: NaiveDate) -> DailyRoutine {
    let mut routine = DailyRoutine::base(
        "Balanced feed for growth and development (2-2.5% body weight)",
        "Monitor growth rate, reproductive development, and overall health",
        "Group housing with other heifers",
        "Preparing for first breeding and future milk production",
    );
    routine.exercise = Some("Regular exercise to promote healthy development".to_string());

    let age_in_months = animal.age_in_months(today).unwrap_or(0);
    if age_in_months < 6 {
        routine.stage = Some("Pre-weaning - still with mother".to_string());
        routine.feeding = "Milk-based diet supplemented with starter feed".to_string();
    } else if age_in_months < 12 {
        routine.stage = Some("Post-weaning - growing phase".to_string());
        routine.feeding = "High-quality growing feed".to_string();
    } else if age_in_months < 15 {
        routine.stage = Some("Pre-breeding phase".to_string());
        routine.breeding_prep = Some("Monitor for breeding readiness (target: 13-15 months)".to_string());
    } else {
        routine.stage = Some("Breeding age".to_string());
        routine.breeding_prep = Some("Ready for first breeding".to_string());
    }

    routine
}
