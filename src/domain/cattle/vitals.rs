//! Cattle vitals records and weaning eligibility.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::animal::Animal;
use crate::domain::foundation::AnimalId;

/// Standard weaning age bounds in months.
pub const MIN_WEANING_AGE_MONTHS: i64 = 6;
pub const MAX_WEANING_AGE_MONTHS: i64 = 8;

/// One vitals check for a cattle animal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CattleVitals {
    pub id: Uuid,
    pub animal_id: AnimalId,
    pub weight_kg: Option<f64>,
    pub heart_rate: Option<i32>,
    pub temperature: Option<f64>,
    pub respiration_rate: Option<i32>,
    pub notes: Option<String>,
    pub checked_at: DateTime<Utc>,
}

/// Caller-supplied measurements for one vitals check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalsMeasurements {
    pub weight_kg: Option<f64>,
    pub heart_rate: Option<i32>,
    pub temperature: Option<f64>,
    pub respiration_rate: Option<i32>,
    pub notes: Option<String>,
    /// Defaults to now when absent.
    pub checked_at: Option<DateTime<Utc>>,
}

/// Weaning eligibility for a calf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "assessment", rename_all = "snake_case")]
pub enum WeaningEligibility {
    /// Cannot be assessed without a date of birth.
    Unknown { reason: String },
    Assessed {
        eligible: bool,
        age_in_months: i64,
        age_in_days: i64,
        min_age_months: i64,
        max_age_months: i64,
        recommendation: String,
        has_mother: bool,
    },
}

/// Checks whether a calf is in the standard 6-8 month weaning window.
/// Callers must have verified the animal is cattle.
pub fn weaning_eligibility(animal: &Animal, today: NaiveDate) -> WeaningEligibility {
    let (age_in_months, age_in_days) = match (animal.age_in_months(today), animal.age_in_days(today)) {
        (Some(months), Some(days)) => (months, days),
        _ => {
            return WeaningEligibility::Unknown {
                reason: "Date of birth not available".to_string(),
            }
        }
    };

    let eligible =
        age_in_months >= MIN_WEANING_AGE_MONTHS && age_in_months <= MAX_WEANING_AGE_MONTHS;
    let recommendation = if eligible {
        "Ready for weaning".to_string()
    } else if age_in_months < MIN_WEANING_AGE_MONTHS {
        format!("Too young - wait until {} months", MIN_WEANING_AGE_MONTHS)
    } else {
        format!(
            "Past optimal weaning window - should have been weaned by {} months",
            MAX_WEANING_AGE_MONTHS
        )
    };

    WeaningEligibility::Assessed {
        eligible,
        age_in_months,
        age_in_days,
        min_age_months: MIN_WEANING_AGE_MONTHS,
        max_age_months: MAX_WEANING_AGE_MONTHS,
        recommendation,
        has_mother: animal.mother_id().is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cattle::animal::{AnimalDetail, AnimalKind, CattleRole, CattleType};
    use crate::domain::foundation::{CowId, FarmId};
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    fn calf(dob: Option<NaiveDate>, with_mother: bool) -> Animal {
        let cow_id = CowId::new();
        let mut animal = Animal::new(
            AnimalId::new(),
            "CALF-9".to_string(),
            FarmId::new(),
            AnimalKind::Cattle(CattleType::Heifer),
            AnimalDetail::Cattle(CattleRole::Cow(cow_id)),
        )
        .unwrap();
        animal.set_date_of_birth(dob);
        if with_mother {
            animal.set_parents(Some(AnimalId::new()), None);
        }
        animal
    }

    #[test]
    fn missing_date_of_birth_is_unknown() {
        let result = weaning_eligibility(&calf(None, false), today());
        assert!(matches!(result, WeaningEligibility::Unknown { .. }));
    }

    #[test]
    fn seven_month_old_calf_is_eligible() {
        let dob = today() - Days::new(7 * 31);
        let result = weaning_eligibility(&calf(Some(dob), true), today());
        match result {
            WeaningEligibility::Assessed {
                eligible,
                age_in_months,
                recommendation,
                has_mother,
                ..
            } => {
                assert!(eligible);
                assert_eq!(age_in_months, 7);
                assert_eq!(recommendation, "Ready for weaning");
                assert!(has_mother);
            }
            other => panic!("expected assessed result, got {:?}", other),
        }
    }

    #[test]
    fn three_month_old_calf_is_too_young() {
        let dob = today() - Days::new(3 * 31);
        let result = weaning_eligibility(&calf(Some(dob), true), today());
        match result {
            WeaningEligibility::Assessed { eligible, recommendation, .. } => {
                assert!(!eligible);
                assert_eq!(recommendation, "Too young - wait until 6 months");
            }
            other => panic!("expected assessed result, got {:?}", other),
        }
    }

    #[test]
    fn yearling_is_past_the_window() {
        let dob = today() - Days::new(12 * 31);
        let result = weaning_eligibility(&calf(Some(dob), false), today());
        match result {
            WeaningEligibility::Assessed { eligible, recommendation, has_mother, .. } => {
                assert!(!eligible);
                assert!(recommendation.starts_with("Past optimal weaning window"));
                assert!(!has_mother);
            }
            other => panic!("expected assessed result, got {:?}", other),
        }
    }
}
