//! Herd reader port (read side).
//!
//! Query contract for cows, their animals, and insemination history.
//! Relationship traversal and ordering live behind this port; the domain
//! receives plain records.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::cattle::{Animal, Bull, Cow, Insemination, SireRef};
use crate::domain::foundation::{
    AnimalId, BullId, CowId, DateWindow, DomainError, FarmId, InseminationId,
};

/// A cow with the relationships the selectors need. Missing relationships
/// stay `None`; the domain decides whether that excludes the cow.
#[derive(Debug, Clone)]
pub struct CowRecord {
    pub cow: Cow,
    pub animal: Option<Animal>,
    /// Most recent insemination, ordered by insemination date then
    /// creation timestamp, both descending.
    pub latest_insemination: Option<Insemination>,
    /// Sire of the latest insemination, resolved through its bull record.
    pub latest_sire: Option<SireRef>,
}

/// Read port over the herd.
#[async_trait]
pub trait HerdReader: Send + Sync {
    /// Find a cow breeding record by id.
    async fn cow(&self, id: &CowId) -> Result<Option<Cow>, DomainError>;

    /// The animal owning a cow record, if one exists.
    async fn animal_for_cow(&self, id: &CowId) -> Result<Option<Animal>, DomainError>;

    /// Find an animal by id.
    async fn animal(&self, id: &AnimalId) -> Result<Option<Animal>, DomainError>;

    /// Find a bull breeding record by id.
    async fn bull(&self, id: &BullId) -> Result<Option<Bull>, DomainError>;

    /// Cows whose `last_insemination_date` falls inside `window`,
    /// optionally restricted to one farm.
    async fn cows_in_final_month(
        &self,
        window: DateWindow,
        farm_id: Option<&FarmId>,
    ) -> Result<Vec<CowRecord>, DomainError>;

    /// Cows with a calving date, no live insemination date, and no
    /// actual calving date for the current cycle, optionally restricted
    /// to one farm.
    async fn breeding_eligible_cows(
        &self,
        farm_id: Option<&FarmId>,
    ) -> Result<Vec<CowRecord>, DomainError>;

    /// Find an insemination record by id.
    async fn insemination(&self, id: &InseminationId) -> Result<Option<Insemination>, DomainError>;

    /// Most recent insemination for a cow (insemination date desc,
    /// creation timestamp desc).
    async fn latest_insemination(&self, cow_id: &CowId)
        -> Result<Option<Insemination>, DomainError>;

    /// Most recently created pending insemination for a cow.
    async fn latest_pending_insemination(
        &self,
        cow_id: &CowId,
    ) -> Result<Option<Insemination>, DomainError>;

    /// Most recently created confirmed insemination for a cow.
    async fn latest_confirmed_insemination(
        &self,
        cow_id: &CowId,
    ) -> Result<Option<Insemination>, DomainError>;

    /// Most recently created confirmed insemination with the given date,
    /// used to resolve the sire of a pregnancy.
    async fn confirmed_insemination_on(
        &self,
        cow_id: &CowId,
        date: NaiveDate,
    ) -> Result<Option<Insemination>, DomainError>;

    /// The animal owning a bull record, restricted to one farm.
    async fn bull_animal(
        &self,
        bull_id: &BullId,
        farm_id: &FarmId,
    ) -> Result<Option<Animal>, DomainError>;

    /// All farm ids, for farm-by-farm batch runs.
    async fn farm_ids(&self) -> Result<Vec<FarmId>, DomainError>;
}
