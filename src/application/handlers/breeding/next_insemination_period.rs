//! NextInseminationPeriodHandler - Query handler for one cow's next
//! insemination window.

use std::sync::Arc;

use crate::domain::cattle::{next_insemination_period, BreedingError, NextInseminationPeriod};
use crate::domain::foundation::CowId;
use crate::ports::{Clock, HerdReader};

/// Query for a cow's next insemination period.
#[derive(Debug, Clone)]
pub struct NextInseminationPeriodQuery {
    pub cow_id: CowId,
}

/// Handler for the next-insemination-period query. Returns `None` for a
/// cow that is pregnant or has never calved.
pub struct NextInseminationPeriodHandler {
    reader: Arc<dyn HerdReader>,
    clock: Arc<dyn Clock>,
}

impl NextInseminationPeriodHandler {
    pub fn new(reader: Arc<dyn HerdReader>, clock: Arc<dyn Clock>) -> Self {
        Self { reader, clock }
    }

    pub async fn handle(
        &self,
        query: NextInseminationPeriodQuery,
    ) -> Result<Option<NextInseminationPeriod>, BreedingError> {
        let cow = self
            .reader
            .cow(&query.cow_id)
            .await?
            .ok_or(BreedingError::CowNotFound(query.cow_id))?;
        let latest = self.reader.latest_insemination(&query.cow_id).await?;

        Ok(next_insemination_period(&cow, latest.as_ref(), self.clock.today()))
    }
}
