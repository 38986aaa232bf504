//! Row mapping helpers shared by the PostgreSQL adapters.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use super::db_error;
use crate::domain::cattle::{
    Animal, AnimalDetail, AnimalKind, Bull, CattleRole, CattleType, Cow, HorseType, Insemination,
    InseminationStatus, SheepType,
};
use crate::domain::foundation::{
    AnimalId, BullId, CowId, DomainError, ErrorCode, FarmId, InseminationId,
};

pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| db_error(&format!("Failed to get column '{}'", name), e))
}

pub(crate) fn kind_to_columns(kind: AnimalKind) -> (&'static str, &'static str) {
    match kind {
        AnimalKind::Cattle(CattleType::Bull) => ("cattle", "Bull"),
        AnimalKind::Cattle(CattleType::Cow) => ("cattle", "Cow"),
        AnimalKind::Cattle(CattleType::Steer) => ("cattle", "Steer"),
        AnimalKind::Cattle(CattleType::Heifer) => ("cattle", "Heifer"),
        AnimalKind::Horse(HorseType::Stallion) => ("horse", "Stallion"),
        AnimalKind::Horse(HorseType::Gelding) => ("horse", "Gelding"),
        AnimalKind::Horse(HorseType::Mare) => ("horse", "Mare"),
        AnimalKind::Sheep(SheepType::Ram) => ("sheep", "Ram"),
        AnimalKind::Sheep(SheepType::Wether) => ("sheep", "Wether"),
        AnimalKind::Sheep(SheepType::Ewe) => ("sheep", "Ewe"),
    }
}

pub(crate) fn kind_from_columns(
    species: &str,
    animal_type: &str,
) -> Result<AnimalKind, DomainError> {
    let kind = match (species, animal_type) {
        ("cattle", "Bull") => AnimalKind::Cattle(CattleType::Bull),
        ("cattle", "Cow") => AnimalKind::Cattle(CattleType::Cow),
        ("cattle", "Steer") => AnimalKind::Cattle(CattleType::Steer),
        ("cattle", "Heifer") => AnimalKind::Cattle(CattleType::Heifer),
        ("horse", "Stallion") => AnimalKind::Horse(HorseType::Stallion),
        ("horse", "Gelding") => AnimalKind::Horse(HorseType::Gelding),
        ("horse", "Mare") => AnimalKind::Horse(HorseType::Mare),
        ("sheep", "Ram") => AnimalKind::Sheep(SheepType::Ram),
        ("sheep", "Wether") => AnimalKind::Sheep(SheepType::Wether),
        ("sheep", "Ewe") => AnimalKind::Sheep(SheepType::Ewe),
        _ => {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid animal classification: {}/{}", species, animal_type),
            ))
        }
    };
    Ok(kind)
}

pub(crate) fn status_to_str(status: InseminationStatus) -> &'static str {
    status.as_str()
}

pub(crate) fn str_to_status(s: &str) -> Result<InseminationStatus, DomainError> {
    match s {
        "pending" => Ok(InseminationStatus::Pending),
        "confirmed" => Ok(InseminationStatus::Confirmed),
        "failed" => Ok(InseminationStatus::Failed),
        "needs_repeat" => Ok(InseminationStatus::NeedsRepeat),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid insemination status: {}", s),
        )),
    }
}

pub(crate) fn row_to_animal(row: PgRow) -> Result<Animal, DomainError> {
    let id: Uuid = column(&row, "id")?;
    let tag_number: String = column(&row, "tag_number")?;
    let farm_id: Uuid = column(&row, "farm_id")?;
    let species: String = column(&row, "species")?;
    let animal_type: String = column(&row, "animal_type")?;
    let name: Option<String> = column(&row, "name")?;
    let date_of_birth: Option<NaiveDate> = column(&row, "date_of_birth")?;
    let mother_id: Option<Uuid> = column(&row, "mother_id")?;
    let father_id: Option<Uuid> = column(&row, "father_id")?;
    let cow_id: Option<Uuid> = column(&row, "cow_id")?;
    let bull_id: Option<Uuid> = column(&row, "bull_id")?;
    let is_active: bool = column(&row, "is_active")?;

    let kind = kind_from_columns(&species, &animal_type)?;
    let detail = match kind {
        AnimalKind::Cattle(CattleType::Bull) => {
            let bull_id = bull_id.ok_or_else(|| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Bull animal without bull record: {}", id),
                )
            })?;
            AnimalDetail::Cattle(CattleRole::Bull(BullId::from_uuid(bull_id)))
        }
        AnimalKind::Cattle(_) => {
            let cow_id = cow_id.ok_or_else(|| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Cattle animal without cow record: {}", id),
                )
            })?;
            AnimalDetail::Cattle(CattleRole::Cow(CowId::from_uuid(cow_id)))
        }
        _ => AnimalDetail::None,
    };

    Ok(Animal::reconstitute(
        AnimalId::from_uuid(id),
        tag_number,
        FarmId::from_uuid(farm_id),
        kind,
        name,
        date_of_birth,
        mother_id.map(AnimalId::from_uuid),
        father_id.map(AnimalId::from_uuid),
        detail,
        is_active,
    ))
}

pub(crate) fn row_to_cow(row: PgRow) -> Result<Cow, DomainError> {
    Ok(Cow {
        id: CowId::from_uuid(column(&row, "id")?),
        milk_yield: column(&row, "milk_yield")?,
        last_calving_date: column(&row, "last_calving_date")?,
        last_insemination_date: column(&row, "last_insemination_date")?,
        expected_calving_date: column(&row, "expected_calving_date")?,
        actual_calving_date: column(&row, "actual_calving_date")?,
    })
}

pub(crate) fn row_to_bull(row: PgRow) -> Result<Bull, DomainError> {
    Ok(Bull {
        id: BullId::from_uuid(column(&row, "id")?),
        semen_quality: column(&row, "semen_quality")?,
        aggression_level: column(&row, "aggression_level")?,
    })
}

pub(crate) fn row_to_insemination(row: PgRow) -> Result<Insemination, DomainError> {
    let status: String = column(&row, "status")?;
    let bull_id: Option<Uuid> = column(&row, "bull_id")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;
    Ok(Insemination {
        id: InseminationId::from_uuid(column(&row, "id")?),
        cow_id: CowId::from_uuid(column(&row, "cow_id")?),
        animal_id: AnimalId::from_uuid(column(&row, "animal_id")?),
        insemination_date: column(&row, "insemination_date")?,
        status: str_to_status(&status)?,
        bull_id: bull_id.map(BullId::from_uuid),
        notes: column(&row, "notes")?,
        performed_by: column(&row, "performed_by")?,
        created_at,
    })
}
