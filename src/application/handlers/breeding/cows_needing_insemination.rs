//! CowsNeedingInseminationHandler - Query handler for the insemination
//! readiness listing.

use std::sync::Arc;

use crate::domain::cattle::{insemination_readiness, BreedingError, InseminationReadiness};
use crate::domain::foundation::FarmId;
use crate::ports::{Clock, HerdReader};

/// Query for cows in or near the post-calving insemination window.
#[derive(Debug, Clone)]
pub struct CowsNeedingInseminationQuery {
    /// `None` lists across all farms.
    pub farm_id: Option<FarmId>,
}

/// Handler for the insemination readiness listing. Cows outside the alert
/// band (and not overdue or retry-due) are excluded; results are ordered
/// most days since calving first.
pub struct CowsNeedingInseminationHandler {
    reader: Arc<dyn HerdReader>,
    clock: Arc<dyn Clock>,
}

impl CowsNeedingInseminationHandler {
    pub fn new(reader: Arc<dyn HerdReader>, clock: Arc<dyn Clock>) -> Self {
        Self { reader, clock }
    }

    pub async fn handle(
        &self,
        query: CowsNeedingInseminationQuery,
    ) -> Result<Vec<InseminationReadiness>, BreedingError> {
        let today = self.clock.today();
        let records = self
            .reader
            .breeding_eligible_cows(query.farm_id.as_ref())
            .await?;

        let mut entries: Vec<InseminationReadiness> = records
            .iter()
            .filter_map(|record| {
                insemination_readiness(
                    &record.cow,
                    record.animal.as_ref(),
                    record.latest_insemination.as_ref(),
                    record.latest_sire.clone(),
                    today,
                )
            })
            .collect();
        entries.sort_by_key(|entry| std::cmp::Reverse(entry.days_since_calving));

        Ok(entries)
    }
}
