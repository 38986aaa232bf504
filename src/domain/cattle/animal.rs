//! Animal entity and species/type classification.
//!
//! Every animal on a farm has one `Animal` record. Cattle additionally own a
//! breeding record (a cow or bull), expressed here as the tagged
//! [`AnimalDetail`] variant selected by species/type at construction time.
//! Horses and sheep own nothing.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    AnimalId, BullId, CowId, DomainError, ErrorCode, FarmId, ValidationError,
};

/// Animal species supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Cattle,
    Horse,
    Sheep,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Species::Cattle => "cattle",
            Species::Horse => "horse",
            Species::Sheep => "sheep",
        };
        write!(f, "{}", s)
    }
}

/// Cattle sub-types. Closed set; there is no open-ended plugin mechanism
/// for per-type behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CattleType {
    Bull,
    Cow,
    Steer,
    Heifer,
}

impl fmt::Display for CattleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CattleType::Bull => "Bull",
            CattleType::Cow => "Cow",
            CattleType::Steer => "Steer",
            CattleType::Heifer => "Heifer",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for CattleType {
    type Err = ValidationError;

    /// Case-insensitive parse. Unknown strings are rejected, never coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bull" => Ok(CattleType::Bull),
            "cow" => Ok(CattleType::Cow),
            "steer" => Ok(CattleType::Steer),
            "heifer" => Ok(CattleType::Heifer),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("Unknown cattle type: {}", other),
            )),
        }
    }
}

/// Horse sub-types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorseType {
    Stallion,
    Gelding,
    Mare,
}

/// Sheep sub-types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SheepType {
    Ram,
    Wether,
    Ewe,
}

/// Species plus sub-type, as one closed classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "species", content = "type", rename_all = "lowercase")]
pub enum AnimalKind {
    Cattle(CattleType),
    Horse(HorseType),
    Sheep(SheepType),
}

impl AnimalKind {
    pub fn species(&self) -> Species {
        match self {
            AnimalKind::Cattle(_) => Species::Cattle,
            AnimalKind::Horse(_) => Species::Horse,
            AnimalKind::Sheep(_) => Species::Sheep,
        }
    }

    /// Gender derived from the sub-type. Castrated males (steer, gelding,
    /// wether) still count as male; everything not explicitly male is female.
    pub fn gender(&self) -> Gender {
        match self {
            AnimalKind::Cattle(CattleType::Bull | CattleType::Steer) => Gender::Male,
            AnimalKind::Horse(HorseType::Stallion | HorseType::Gelding) => Gender::Male,
            AnimalKind::Sheep(SheepType::Ram | SheepType::Wether) => Gender::Male,
            _ => Gender::Female,
        }
    }

    /// The cattle sub-type, if this is a cattle kind.
    pub fn cattle_type(&self) -> Option<CattleType> {
        match self {
            AnimalKind::Cattle(t) => Some(*t),
            _ => None,
        }
    }
}

/// Animal gender, derived from type rather than stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Link from an animal to the breeding record it owns.
///
/// Replaces the original polymorphic "animalable" relation: the variant is
/// fixed at construction, so there are no dynamic type lookups and no
/// missing-class guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum AnimalDetail {
    /// Horses and sheep carry no breeding record.
    None,
    Cattle(CattleRole),
}

/// Cattle breeding-record role. Bulls own a bull record; cows, steers and
/// heifers own a cow record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CattleRole {
    Bull(BullId),
    Cow(CowId),
}

impl AnimalDetail {
    /// Selects the detail variant for a kind at construction time.
    pub fn for_kind(kind: AnimalKind, bull_id: impl FnOnce() -> BullId, cow_id: impl FnOnce() -> CowId) -> Self {
        match kind {
            AnimalKind::Cattle(CattleType::Bull) => AnimalDetail::Cattle(CattleRole::Bull(bull_id())),
            AnimalKind::Cattle(_) => AnimalDetail::Cattle(CattleRole::Cow(cow_id())),
            _ => AnimalDetail::None,
        }
    }
}

/// Animal entity.
///
/// # Invariants
///
/// - `kind` and `detail` agree: cattle carry a `Cattle` detail, other
///   species carry `None`
/// - `gender` always matches `kind.gender()`
/// - tag numbers are non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    id: AnimalId,
    tag_number: String,
    farm_id: FarmId,
    kind: AnimalKind,
    name: Option<String>,
    date_of_birth: Option<NaiveDate>,
    mother_id: Option<AnimalId>,
    father_id: Option<AnimalId>,
    detail: AnimalDetail,
    is_active: bool,
}

impl Animal {
    /// Creates a new active animal.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the tag number is empty
    /// - `ValidationFailed` if the detail variant does not match the kind
    pub fn new(
        id: AnimalId,
        tag_number: String,
        farm_id: FarmId,
        kind: AnimalKind,
        detail: AnimalDetail,
    ) -> Result<Self, DomainError> {
        if tag_number.trim().is_empty() {
            return Err(DomainError::validation("tag_number", "Tag number cannot be empty"));
        }
        let detail_matches = matches!(
            (&kind, &detail),
            (AnimalKind::Cattle(_), AnimalDetail::Cattle(_))
                | (AnimalKind::Horse(_), AnimalDetail::None)
                | (AnimalKind::Sheep(_), AnimalDetail::None)
        );
        if !detail_matches {
            return Err(DomainError::validation(
                "detail",
                format!("Detail record does not match species '{}'", kind.species()),
            ));
        }
        Ok(Self {
            id,
            tag_number,
            farm_id,
            kind,
            name: None,
            date_of_birth: None,
            mother_id: None,
            father_id: None,
            detail,
            is_active: true,
        })
    }

    /// Reconstitute an animal from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: AnimalId,
        tag_number: String,
        farm_id: FarmId,
        kind: AnimalKind,
        name: Option<String>,
        date_of_birth: Option<NaiveDate>,
        mother_id: Option<AnimalId>,
        father_id: Option<AnimalId>,
        detail: AnimalDetail,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            tag_number,
            farm_id,
            kind,
            name,
            date_of_birth,
            mother_id,
            father_id,
            detail,
            is_active,
        }
    }

    pub fn id(&self) -> &AnimalId {
        &self.id
    }

    pub fn tag_number(&self) -> &str {
        &self.tag_number
    }

    pub fn farm_id(&self) -> &FarmId {
        &self.farm_id
    }

    pub fn kind(&self) -> AnimalKind {
        self.kind
    }

    pub fn species(&self) -> Species {
        self.kind.species()
    }

    pub fn gender(&self) -> Gender {
        self.kind.gender()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    pub fn mother_id(&self) -> Option<&AnimalId> {
        self.mother_id.as_ref()
    }

    pub fn father_id(&self) -> Option<&AnimalId> {
        self.father_id.as_ref()
    }

    pub fn detail(&self) -> AnimalDetail {
        self.detail
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// The cow record this animal owns, if any.
    pub fn cow_id(&self) -> Option<CowId> {
        match self.detail {
            AnimalDetail::Cattle(CattleRole::Cow(id)) => Some(id),
            _ => None,
        }
    }

    /// The bull record this animal owns, if any.
    pub fn bull_id(&self) -> Option<BullId> {
        match self.detail {
            AnimalDetail::Cattle(CattleRole::Bull(id)) => Some(id),
            _ => None,
        }
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn set_date_of_birth(&mut self, date: Option<NaiveDate>) {
        self.date_of_birth = date;
    }

    pub fn set_parents(&mut self, mother: Option<AnimalId>, father: Option<AnimalId>) {
        self.mother_id = mother;
        self.father_id = father;
    }

    /// Guards a cattle-only operation.
    ///
    /// # Errors
    ///
    /// - `NotCattle` for any other species; never silently coerces
    pub fn require_cattle(&self) -> Result<(), DomainError> {
        if self.species() == Species::Cattle {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::NotCattle,
                "This operation only works for cattle animals",
            )
            .with_detail("species", self.species().to_string()))
        }
    }

    /// Whole months of age at `today`, `None` without a date of birth.
    pub fn age_in_months(&self, today: NaiveDate) -> Option<i64> {
        let dob = self.date_of_birth?;
        let mut months =
            i64::from(today.year() - dob.year()) * 12 + i64::from(today.month()) - i64::from(dob.month());
        if today.day() < dob.day() {
            months -= 1;
        }
        Some(months)
    }

    /// Whole days of age at `today`, `None` without a date of birth.
    pub fn age_in_days(&self, today: NaiveDate) -> Option<i64> {
        let dob = self.date_of_birth?;
        Some(today.signed_duration_since(dob).num_days())
    }

    /// Promotes a heifer to a cow after her first calving. One-way and
    /// one-time; returns whether the classification changed.
    pub fn promote_heifer_to_cow(&mut self) -> bool {
        if self.kind == AnimalKind::Cattle(CattleType::Heifer) {
            self.kind = AnimalKind::Cattle(CattleType::Cow);
            true
        } else {
            false
        }
    }
}
