//! WeaningEligibilityHandler - Query handler for calf weaning checks.

use std::sync::Arc;

use crate::domain::cattle::{weaning_eligibility, WeaningEligibility};
use crate::domain::foundation::{AnimalId, DomainError, ErrorCode};
use crate::ports::{Clock, HerdReader};

/// Query for a calf's weaning eligibility.
#[derive(Debug, Clone)]
pub struct WeaningEligibilityQuery {
    pub animal_id: AnimalId,
}

/// Handler for the weaning-eligibility query. Cattle only.
pub struct WeaningEligibilityHandler {
    reader: Arc<dyn HerdReader>,
    clock: Arc<dyn Clock>,
}

impl WeaningEligibilityHandler {
    pub fn new(reader: Arc<dyn HerdReader>, clock: Arc<dyn Clock>) -> Self {
        Self { reader, clock }
    }

    pub async fn handle(
        &self,
        query: WeaningEligibilityQuery,
    ) -> Result<WeaningEligibility, DomainError> {
        let animal = self.reader.animal(&query.animal_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::AnimalNotFound,
                format!("Animal not found: {}", query.animal_id),
            )
        })?;
        animal.require_cattle()?;

        Ok(weaning_eligibility(&animal, self.clock.today()))
    }
}
