//! Calving log entries and calf creation inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnimalId, CalvingId, CowId};

/// One calving event. Appended for every recorded calving, successful or
/// not; the success flag records the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calving {
    pub id: CalvingId,
    pub cow_id: CowId,
    pub animal_id: AnimalId,
    pub calving_date: NaiveDate,
    pub is_successful: bool,
    pub notes: Option<String>,
    pub performed_by: Option<String>,
}

/// Caller-supplied description of one newborn calf.
///
/// Gender and the calf's breeding-record role are derived from `cattle_type`,
/// never supplied. Specs with an empty tag number are skipped, not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalfSpec {
    pub tag_number: String,
    /// Raw type string as received from the outer layer ("Bull", "Heifer", ...).
    pub cattle_type: String,
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    /// Explicit sire override; otherwise the sire resolved from the
    /// pregnancy's confirmed insemination is used.
    pub father_id: Option<AnimalId>,
}
