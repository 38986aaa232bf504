//! RecordCalvingHandler - Command handler for closing a pregnancy cycle.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::cattle::{plan_calving, BreedingError, CalfSpec};
use crate::domain::foundation::{AnimalId, CalvingId, CowId};
use crate::ports::{HerdReader, HerdRepository};

/// Command to record a calving.
#[derive(Debug, Clone)]
pub struct RecordCalvingCommand {
    pub cow_id: CowId,
    pub calving_date: NaiveDate,
    pub is_successful: bool,
    pub calves: Vec<CalfSpec>,
    pub notes: Option<String>,
    pub performed_by: Option<String>,
}

/// Result of a recorded calving.
#[derive(Debug, Clone)]
pub struct RecordCalvingResult {
    pub calving_id: CalvingId,
    pub calves_created: usize,
    /// Whether the mother was promoted from heifer to cow.
    pub promoted_to_cow: bool,
}

/// Handler for recording calvings. The cycle closes whether or not the
/// calving succeeded; calves are only created on success. The sire is
/// resolved through the confirmed insemination that started the
/// pregnancy, unless a calf spec names its father explicitly.
pub struct RecordCalvingHandler {
    reader: Arc<dyn HerdReader>,
    repository: Arc<dyn HerdRepository>,
}

impl RecordCalvingHandler {
    pub fn new(reader: Arc<dyn HerdReader>, repository: Arc<dyn HerdRepository>) -> Self {
        Self { reader, repository }
    }

    pub async fn handle(
        &self,
        cmd: RecordCalvingCommand,
    ) -> Result<RecordCalvingResult, BreedingError> {
        let cow = self
            .reader
            .cow(&cmd.cow_id)
            .await?
            .ok_or(BreedingError::CowNotFound(cmd.cow_id))?;
        let animal = self.reader.animal_for_cow(&cmd.cow_id).await?;

        let resolved_father = match (&animal, cow.last_insemination_date) {
            (Some(animal), Some(date)) => self.resolve_sire(&cow, animal, date).await?,
            _ => None,
        };

        let plan = plan_calving(
            &cow,
            animal.as_ref(),
            cmd.calving_date,
            cmd.is_successful,
            &cmd.calves,
            cmd.notes,
            cmd.performed_by,
            resolved_father,
        )?;

        let calves_created = plan.calves.len();
        let promoted_to_cow = plan.promote_animal.is_some();
        let calving_id = plan.log_id;

        self.repository.commit_calving(&plan).await?;

        Ok(RecordCalvingResult {
            calving_id,
            calves_created,
            promoted_to_cow,
        })
    }

    /// Resolves the calves' father through the confirmed insemination
    /// matching the cow's current pregnancy, when it names a bull.
    async fn resolve_sire(
        &self,
        cow: &crate::domain::cattle::Cow,
        animal: &crate::domain::cattle::Animal,
        insemination_date: NaiveDate,
    ) -> Result<Option<AnimalId>, BreedingError> {
        let Some(record) = self
            .reader
            .confirmed_insemination_on(&cow.id, insemination_date)
            .await?
        else {
            return Ok(None);
        };
        let Some(bull_id) = record.bull_id else {
            return Ok(None);
        };
        let bull_animal = self.reader.bull_animal(&bull_id, animal.farm_id()).await?;
        Ok(bull_animal.map(|a| *a.id()))
    }
}
