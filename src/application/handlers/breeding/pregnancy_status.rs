//! PregnancyStatusHandler - Query handler for a cow's pregnancy progress.

use std::sync::Arc;

use crate::domain::cattle::{pregnancy_progress, BreedingError, PregnancyProgress};
use crate::domain::foundation::CowId;
use crate::ports::{Clock, HerdReader};

/// Query for one cow's pregnancy progress.
#[derive(Debug, Clone)]
pub struct PregnancyStatusQuery {
    pub cow_id: CowId,
}

/// Handler for the pregnancy-progress query. Returns `None` for a cow
/// with no insemination on record.
pub struct PregnancyStatusHandler {
    reader: Arc<dyn HerdReader>,
    clock: Arc<dyn Clock>,
}

impl PregnancyStatusHandler {
    pub fn new(reader: Arc<dyn HerdReader>, clock: Arc<dyn Clock>) -> Self {
        Self { reader, clock }
    }

    pub async fn handle(
        &self,
        query: PregnancyStatusQuery,
    ) -> Result<Option<PregnancyProgress>, BreedingError> {
        let cow = self
            .reader
            .cow(&query.cow_id)
            .await?
            .ok_or(BreedingError::CowNotFound(query.cow_id))?;

        Ok(pregnancy_progress(&cow, self.clock.today()))
    }
}
