//! Transaction plans for the recording operations.
//!
//! The functions here compute, purely, everything a recording operation
//! will write: field updates, log entries, calves to create, the heifer
//! promotion. The write port commits one plan atomically, so a partially
//! applied operation is never observable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::animal::{Animal, AnimalKind, CattleRole, CattleType, Gender};
use super::calving::CalfSpec;
use super::cow::Cow;
use super::insemination::{Insemination, InseminationStatus};
use super::pregnancy::expected_calving;
use crate::domain::foundation::{
    AnimalId, BullId, CalvingId, CowId, DomainError, ErrorCode, FarmId, InseminationId,
};

/// A new insemination attempt to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInsemination {
    pub id: InseminationId,
    pub cow_id: CowId,
    pub animal_id: AnimalId,
    pub insemination_date: NaiveDate,
    pub status: InseminationStatus,
    pub bull_id: Option<BullId>,
    pub notes: Option<String>,
    pub performed_by: Option<String>,
}

/// Demotion of a superseded pending attempt to `needs_repeat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDemotion {
    pub insemination_id: InseminationId,
    pub notes: String,
}

/// Everything the record-insemination operation writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InseminationPlan {
    /// Demote the currently pending attempt first, when one exists.
    pub demote: Option<PendingDemotion>,
    pub record: NewInsemination,
}

/// Plans a new insemination attempt.
///
/// The cow's `last_insemination_date` is deliberately not touched here:
/// it only moves on confirmation, so cows with unresolved attempts keep
/// appearing in the readiness selector.
///
/// # Errors
///
/// - `MissingLinkedRecord` when the cow has no associated animal
#[allow(clippy::too_many_arguments)]
pub fn plan_insemination(
    cow: &Cow,
    animal: Option<&Animal>,
    latest_pending: Option<&Insemination>,
    insemination_date: NaiveDate,
    notes: Option<String>,
    performed_by: Option<String>,
    bull_id: Option<BullId>,
) -> Result<InseminationPlan, DomainError> {
    let animal = animal.ok_or_else(|| {
        DomainError::new(
            ErrorCode::MissingLinkedRecord,
            "Cow must have an associated animal record",
        )
    })?;

    let demote = latest_pending
        .filter(|record| record.status == InseminationStatus::Pending)
        .map(|record| PendingDemotion {
            insemination_id: record.id,
            notes: Insemination::replaced_note(record.notes.as_deref()),
        });

    Ok(InseminationPlan {
        demote,
        record: NewInsemination {
            id: InseminationId::new(),
            cow_id: cow.id,
            animal_id: *animal.id(),
            insemination_date,
            status: InseminationStatus::Pending,
            bull_id,
            notes,
            performed_by,
        },
    })
}

/// Pregnancy fields propagated to the cow when a confirmation lands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PregnancyConfirmation {
    pub cow_id: CowId,
    pub last_insemination_date: NaiveDate,
    pub expected_calving_date: NaiveDate,
}

/// Everything a status update writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdatePlan {
    pub insemination_id: InseminationId,
    pub status: InseminationStatus,
    /// `None` keeps the existing notes.
    pub notes: Option<String>,
    /// Present only when the update makes this the cow's most recent
    /// confirmed attempt.
    pub pregnancy: Option<PregnancyConfirmation>,
}

/// True when `record`, once confirmed, is the cow's most-recently-created
/// confirmed insemination. `latest_existing_confirmed` is the cow's current
/// most recent confirmed attempt, if any.
pub fn becomes_latest_confirmed(
    record: &Insemination,
    latest_existing_confirmed: Option<&Insemination>,
) -> bool {
    match latest_existing_confirmed {
        None => true,
        Some(existing) => existing.id == record.id || existing.created_at <= record.created_at,
    }
}

/// Plans an insemination status update. Confirmation of the latest attempt
/// propagates `last_insemination_date` and the recomputed expected calving
/// date to the cow.
pub fn plan_status_update(
    record: &Insemination,
    status: InseminationStatus,
    notes: Option<String>,
    latest_existing_confirmed: Option<&Insemination>,
) -> StatusUpdatePlan {
    let pregnancy = (status == InseminationStatus::Confirmed
        && becomes_latest_confirmed(record, latest_existing_confirmed))
    .then(|| PregnancyConfirmation {
        cow_id: record.cow_id,
        last_insemination_date: record.insemination_date,
        expected_calving_date: expected_calving(record.insemination_date),
    });

    StatusUpdatePlan {
        insemination_id: record.id,
        status,
        notes,
        pregnancy,
    }
}

/// A calf animal to create, with its breeding-record role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCalf {
    pub animal_id: AnimalId,
    pub tag_number: String,
    pub farm_id: FarmId,
    pub kind: AnimalKind,
    pub gender: Gender,
    pub name: Option<String>,
    pub date_of_birth: NaiveDate,
    pub mother_id: AnimalId,
    pub father_id: Option<AnimalId>,
    /// Freshly generated breeding-record id: bulls get a bull record,
    /// cows, steers and heifers a cow record.
    pub role: CattleRole,
}

/// Everything the record-calving operation writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalvingPlan {
    pub cow_id: CowId,
    pub calving_date: NaiveDate,
    pub performed_by: Option<String>,
    pub log_id: CalvingId,
    pub log_animal_id: AnimalId,
    pub is_successful: bool,
    pub notes: Option<String>,
    pub calves: Vec<NewCalf>,
    /// Heifer-to-cow promotion, applied in the same transaction when this
    /// calving is the cow's first.
    pub promote_animal: Option<AnimalId>,
}

/// Plans a calving. The pregnancy cycle always closes (calving dates set,
/// insemination fields cleared) regardless of the success flag; calves are
/// created only on success.
///
/// # Errors
///
/// - `MissingLinkedRecord` when the cow has no associated animal
/// - `ValidationFailed` when a calf spec carries an unknown cattle type
#[allow(clippy::too_many_arguments)]
pub fn plan_calving(
    cow: &Cow,
    animal: Option<&Animal>,
    calving_date: NaiveDate,
    is_successful: bool,
    calf_specs: &[CalfSpec],
    notes: Option<String>,
    performed_by: Option<String>,
    resolved_father: Option<AnimalId>,
) -> Result<CalvingPlan, DomainError> {
    let animal = animal.ok_or_else(|| {
        DomainError::new(ErrorCode::MissingLinkedRecord, "Animal record not found for cow")
    })?;

    let mut calves = Vec::new();
    if is_successful {
        for spec in calf_specs {
            if spec.tag_number.trim().is_empty() || spec.cattle_type.trim().is_empty() {
                // Incomplete spec entries are skipped, matching read-side
                // missing-record handling.
                continue;
            }
            let cattle_type: CattleType = spec
                .cattle_type
                .parse()
                .map_err(|e| DomainError::validation("cattle_type", format!("{}", e)))?;
            let kind = AnimalKind::Cattle(cattle_type);
            let role = match cattle_type {
                CattleType::Bull => CattleRole::Bull(BullId::new()),
                _ => CattleRole::Cow(CowId::new()),
            };
            calves.push(NewCalf {
                animal_id: AnimalId::new(),
                tag_number: spec.tag_number.clone(),
                farm_id: *animal.farm_id(),
                kind,
                gender: kind.gender(),
                name: spec.name.clone(),
                date_of_birth: spec.date_of_birth.unwrap_or(calving_date),
                mother_id: *animal.id(),
                father_id: spec.father_id.or(resolved_father),
                role,
            });
        }
    }

    let promote_animal = (cow.actual_calving_date.is_none()
        && animal.kind() == AnimalKind::Cattle(CattleType::Heifer))
    .then(|| *animal.id());

    Ok(CalvingPlan {
        cow_id: cow.id,
        calving_date,
        performed_by,
        log_id: CalvingId::new(),
        log_animal_id: *animal.id(),
        is_successful,
        notes,
        calves,
        promote_animal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cattle::animal::AnimalDetail;
    use chrono::{Days, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cow() -> Cow {
        Cow::new(CowId::new())
    }

    fn animal_for(cow: &Cow, cattle_type: CattleType) -> Animal {
        Animal::new(
            AnimalId::new(),
            "C-007".to_string(),
            FarmId::new(),
            AnimalKind::Cattle(cattle_type),
            AnimalDetail::Cattle(CattleRole::Cow(cow.id)),
        )
        .unwrap()
    }

    fn insemination(cow: &Cow, animal: &Animal, status: InseminationStatus, created_h: u32) -> Insemination {
        Insemination {
            id: InseminationId::new(),
            cow_id: cow.id,
            animal_id: *animal.id(),
            insemination_date: date(2026, 5, 1),
            status,
            bull_id: None,
            notes: None,
            performed_by: None,
            created_at: Utc.with_ymd_and_hms(2026, 5, 1, created_h, 0, 0).unwrap(),
        }
    }

    // ── plan_insemination ────────────────────────────────────────────────

    #[test]
    fn planning_without_animal_fails() {
        let err = plan_insemination(&cow(), None, None, date(2026, 5, 1), None, None, None)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingLinkedRecord);
    }

    #[test]
    fn pending_attempt_is_demoted_with_note() {
        let cow = cow();
        let animal = animal_for(&cow, CattleType::Cow);
        let mut pending = insemination(&cow, &animal, InseminationStatus::Pending, 8);
        pending.notes = Some("first try".to_string());

        let plan = plan_insemination(
            &cow,
            Some(&animal),
            Some(&pending),
            date(2026, 6, 1),
            None,
            None,
            None,
        )
        .unwrap();

        let demotion = plan.demote.unwrap();
        assert_eq!(demotion.insemination_id, pending.id);
        assert_eq!(demotion.notes, "first try (Replaced by new insemination)");
        assert_eq!(plan.record.status, InseminationStatus::Pending);
        assert_eq!(plan.record.insemination_date, date(2026, 6, 1));
    }

    #[test]
    fn new_attempt_without_pending_has_no_demotion() {
        let cow = cow();
        let animal = animal_for(&cow, CattleType::Cow);
        let plan = plan_insemination(&cow, Some(&animal), None, date(2026, 6, 1), None, None, None)
            .unwrap();
        assert!(plan.demote.is_none());
    }

    // ── plan_status_update ───────────────────────────────────────────────

    #[test]
    fn confirming_latest_attempt_propagates_pregnancy_fields() {
        let cow = cow();
        let animal = animal_for(&cow, CattleType::Cow);
        let record = insemination(&cow, &animal, InseminationStatus::Pending, 8);

        let plan = plan_status_update(&record, InseminationStatus::Confirmed, None, None);
        let pregnancy = plan.pregnancy.unwrap();
        assert_eq!(pregnancy.last_insemination_date, date(2026, 5, 1));
        assert_eq!(pregnancy.expected_calving_date, date(2026, 5, 1) + Days::new(283));
    }

    #[test]
    fn confirming_older_attempt_does_not_touch_cow() {
        let cow = cow();
        let animal = animal_for(&cow, CattleType::Cow);
        let older = insemination(&cow, &animal, InseminationStatus::Pending, 8);
        let newer_confirmed = insemination(&cow, &animal, InseminationStatus::Confirmed, 12);

        let plan = plan_status_update(
            &older,
            InseminationStatus::Confirmed,
            None,
            Some(&newer_confirmed),
        );
        assert!(plan.pregnancy.is_none());
    }

    #[test]
    fn non_confirmation_updates_never_touch_cow() {
        let cow = cow();
        let animal = animal_for(&cow, CattleType::Cow);
        let record = insemination(&cow, &animal, InseminationStatus::Pending, 8);
        let plan = plan_status_update(&record, InseminationStatus::Failed, None, None);
        assert!(plan.pregnancy.is_none());
    }

    // ── plan_calving ─────────────────────────────────────────────────────

    fn calf_spec(tag: &str, cattle_type: &str) -> CalfSpec {
        CalfSpec {
            tag_number: tag.to_string(),
            cattle_type: cattle_type.to_string(),
            name: None,
            date_of_birth: None,
            father_id: None,
        }
    }

    #[test]
    fn successful_calving_creates_calves_with_derived_roles() {
        let cow = cow();
        let animal = animal_for(&cow, CattleType::Cow);
        let specs = vec![calf_spec("CALF-1", "Bull"), calf_spec("CALF-2", "Heifer")];

        let plan = plan_calving(
            &cow,
            Some(&animal),
            date(2026, 8, 1),
            true,
            &specs,
            None,
            None,
            None,
        )
        .unwrap();

        assert_eq!(plan.calves.len(), 2);
        assert!(matches!(plan.calves[0].role, CattleRole::Bull(_)));
        assert_eq!(plan.calves[0].gender, Gender::Male);
        assert!(matches!(plan.calves[1].role, CattleRole::Cow(_)));
        assert_eq!(plan.calves[1].gender, Gender::Female);
        assert_eq!(plan.calves[0].date_of_birth, date(2026, 8, 1));
        assert_eq!(plan.calves[0].mother_id, *animal.id());
    }

    #[test]
    fn unsuccessful_calving_creates_no_calves() {
        let cow = cow();
        let animal = animal_for(&cow, CattleType::Cow);
        let specs = vec![calf_spec("CALF-1", "Bull")];
        let plan = plan_calving(
            &cow,
            Some(&animal),
            date(2026, 8, 1),
            false,
            &specs,
            None,
            None,
            None,
        )
        .unwrap();
        assert!(plan.calves.is_empty());
        assert!(!plan.is_successful);
    }

    #[test]
    fn incomplete_calf_specs_are_skipped() {
        let cow = cow();
        let animal = animal_for(&cow, CattleType::Cow);
        let specs = vec![calf_spec("", "Bull"), calf_spec("CALF-2", "")];
        let plan = plan_calving(
            &cow,
            Some(&animal),
            date(2026, 8, 1),
            true,
            &specs,
            None,
            None,
            None,
        )
        .unwrap();
        assert!(plan.calves.is_empty());
    }

    #[test]
    fn unknown_calf_type_fails_the_whole_operation() {
        let cow = cow();
        let animal = animal_for(&cow, CattleType::Cow);
        let specs = vec![calf_spec("CALF-1", "Freemartin")];
        let err = plan_calving(
            &cow,
            Some(&animal),
            date(2026, 8, 1),
            true,
            &specs,
            None,
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn explicit_father_overrides_resolved_sire() {
        let cow = cow();
        let animal = animal_for(&cow, CattleType::Cow);
        let resolved = AnimalId::new();
        let explicit = AnimalId::new();
        let mut spec = calf_spec("CALF-1", "Heifer");
        spec.father_id = Some(explicit);

        let plan = plan_calving(
            &cow,
            Some(&animal),
            date(2026, 8, 1),
            true,
            &[spec, calf_spec("CALF-2", "Heifer")],
            None,
            None,
            Some(resolved),
        )
        .unwrap();

        assert_eq!(plan.calves[0].father_id, Some(explicit));
        assert_eq!(plan.calves[1].father_id, Some(resolved));
    }

    #[test]
    fn first_calving_of_heifer_schedules_promotion() {
        let cow = cow();
        let animal = animal_for(&cow, CattleType::Heifer);
        let plan = plan_calving(&cow, Some(&animal), date(2026, 8, 1), true, &[], None, None, None)
            .unwrap();
        assert_eq!(plan.promote_animal, Some(*animal.id()));
    }

    #[test]
    fn repeat_calving_does_not_promote_again() {
        let mut cow = cow();
        cow.actual_calving_date = Some(date(2025, 8, 1));
        let animal = animal_for(&cow, CattleType::Heifer);
        let plan = plan_calving(&cow, Some(&animal), date(2026, 8, 1), true, &[], None, None, None)
            .unwrap();
        assert!(plan.promote_animal.is_none());
    }

    #[test]
    fn cows_are_never_promoted() {
        let cow = cow();
        let animal = animal_for(&cow, CattleType::Cow);
        let plan = plan_calving(&cow, Some(&animal), date(2026, 8, 1), true, &[], None, None, None)
            .unwrap();
        assert!(plan.promote_animal.is_none());
    }

    #[test]
    fn calving_without_animal_fails() {
        let err = plan_calving(&cow(), None, date(2026, 8, 1), true, &[], None, None, None)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingLinkedRecord);
    }
}
