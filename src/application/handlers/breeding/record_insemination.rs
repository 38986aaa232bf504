//! RecordInseminationHandler - Command handler for recording a new
//! insemination attempt.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::cattle::{plan_insemination, BreedingError};
use crate::domain::foundation::{BullId, CowId, InseminationId};
use crate::ports::{HerdReader, HerdRepository};

/// Command to record an insemination attempt for a cow.
#[derive(Debug, Clone)]
pub struct RecordInseminationCommand {
    pub cow_id: CowId,
    pub insemination_date: NaiveDate,
    pub bull_id: Option<BullId>,
    pub notes: Option<String>,
    pub performed_by: Option<String>,
}

/// Result of a recorded insemination.
#[derive(Debug, Clone)]
pub struct RecordInseminationResult {
    pub insemination_id: InseminationId,
    /// The pending attempt demoted to `needs_repeat`, when one existed.
    pub replaced_pending: Option<InseminationId>,
}

/// Handler for recording inseminations. The new attempt starts pending;
/// the cow's pregnancy fields are untouched until it is confirmed.
pub struct RecordInseminationHandler {
    reader: Arc<dyn HerdReader>,
    repository: Arc<dyn HerdRepository>,
}

impl RecordInseminationHandler {
    pub fn new(reader: Arc<dyn HerdReader>, repository: Arc<dyn HerdRepository>) -> Self {
        Self { reader, repository }
    }

    pub async fn handle(
        &self,
        cmd: RecordInseminationCommand,
    ) -> Result<RecordInseminationResult, BreedingError> {
        let cow = self
            .reader
            .cow(&cmd.cow_id)
            .await?
            .ok_or(BreedingError::CowNotFound(cmd.cow_id))?;
        let animal = self.reader.animal_for_cow(&cmd.cow_id).await?;
        let latest_pending = self.reader.latest_pending_insemination(&cmd.cow_id).await?;

        let plan = plan_insemination(
            &cow,
            animal.as_ref(),
            latest_pending.as_ref(),
            cmd.insemination_date,
            cmd.notes,
            cmd.performed_by,
            cmd.bull_id,
        )?;

        self.repository.commit_insemination(&plan).await?;

        Ok(RecordInseminationResult {
            insemination_id: plan.record.id,
            replaced_pending: plan.demote.map(|d| d.insemination_id),
        })
    }
}
