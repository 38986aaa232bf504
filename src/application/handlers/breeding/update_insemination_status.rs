//! UpdateInseminationStatusHandler - Command handler for resolving an
//! insemination attempt.

use std::sync::Arc;

use crate::domain::cattle::{plan_status_update, BreedingError, InseminationStatus};
use crate::domain::foundation::InseminationId;
use crate::ports::{HerdReader, HerdRepository};

/// Command to change an insemination attempt's status.
#[derive(Debug, Clone)]
pub struct UpdateInseminationStatusCommand {
    pub insemination_id: InseminationId,
    pub status: InseminationStatus,
    /// `None` keeps the existing notes.
    pub notes: Option<String>,
}

/// Result of a status update.
#[derive(Debug, Clone)]
pub struct UpdateInseminationStatusResult {
    pub insemination_id: InseminationId,
    pub status: InseminationStatus,
    /// Whether the cow's pregnancy fields were updated by this change.
    pub pregnancy_updated: bool,
}

/// Handler for insemination status updates. Confirming the cow's latest
/// attempt propagates the insemination date and recomputed expected
/// calving date to her breeding record; confirming an older attempt, or
/// any non-confirmation update, leaves the cow untouched.
pub struct UpdateInseminationStatusHandler {
    reader: Arc<dyn HerdReader>,
    repository: Arc<dyn HerdRepository>,
}

impl UpdateInseminationStatusHandler {
    pub fn new(reader: Arc<dyn HerdReader>, repository: Arc<dyn HerdRepository>) -> Self {
        Self { reader, repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateInseminationStatusCommand,
    ) -> Result<UpdateInseminationStatusResult, BreedingError> {
        let record = self
            .reader
            .insemination(&cmd.insemination_id)
            .await?
            .ok_or(BreedingError::InseminationNotFound(cmd.insemination_id))?;
        let latest_confirmed = self
            .reader
            .latest_confirmed_insemination(&record.cow_id)
            .await?;

        let plan = plan_status_update(&record, cmd.status, cmd.notes, latest_confirmed.as_ref());
        let pregnancy_updated = plan.pregnancy.is_some();

        self.repository.commit_status_update(&plan).await?;

        Ok(UpdateInseminationStatusResult {
            insemination_id: cmd.insemination_id,
            status: cmd.status,
            pregnancy_updated,
        })
    }
}
