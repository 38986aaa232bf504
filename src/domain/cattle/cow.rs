//! Cow breeding record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::CowId;

/// Breeding record owned by a female cattle animal (cow or heifer).
///
/// # Invariants
///
/// - A non-pregnant cow has `last_insemination_date = None`
/// - A cow is pregnant iff `last_insemination_date` is set and the cycle
///   has not yet closed with an `actual_calving_date`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cow {
    pub id: CowId,
    /// Daily milk yield in liters, where tracked.
    pub milk_yield: Option<f64>,
    pub last_calving_date: Option<NaiveDate>,
    pub last_insemination_date: Option<NaiveDate>,
    pub expected_calving_date: Option<NaiveDate>,
    pub actual_calving_date: Option<NaiveDate>,
}

impl Cow {
    pub fn new(id: CowId) -> Self {
        Self {
            id,
            milk_yield: None,
            last_calving_date: None,
            last_insemination_date: None,
            expected_calving_date: None,
            actual_calving_date: None,
        }
    }

    /// True while an insemination has been confirmed and no calving has
    /// closed the cycle.
    pub fn is_pregnant(&self) -> bool {
        self.last_insemination_date.is_some() && self.actual_calving_date.is_none()
    }

    /// True once calved and open for a new breeding cycle: not pregnant and
    /// not mid-calving.
    pub fn is_open_for_breeding(&self) -> bool {
        self.last_calving_date.is_some()
            && self.last_insemination_date.is_none()
            && self.actual_calving_date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fresh_cow_is_neither_pregnant_nor_open() {
        let cow = Cow::new(CowId::new());
        assert!(!cow.is_pregnant());
        assert!(!cow.is_open_for_breeding());
    }

    #[test]
    fn confirmed_insemination_means_pregnant() {
        let mut cow = Cow::new(CowId::new());
        cow.last_insemination_date = Some(date(2026, 5, 1));
        assert!(cow.is_pregnant());
        assert!(!cow.is_open_for_breeding());
    }

    #[test]
    fn calved_cow_without_new_insemination_is_open() {
        let mut cow = Cow::new(CowId::new());
        cow.last_calving_date = Some(date(2026, 5, 1));
        assert!(cow.is_open_for_breeding());
    }
}
