//! DailyRoutineHandler - Query handler for a cattle animal's daily care
//! routine.

use std::sync::Arc;

use crate::domain::cattle::{daily_routine, DailyRoutine};
use crate::domain::foundation::{AnimalId, DomainError, ErrorCode};
use crate::ports::{Clock, HerdReader};

/// Query for one animal's daily routine.
#[derive(Debug, Clone)]
pub struct DailyRoutineQuery {
    pub animal_id: AnimalId,
}

/// Handler for the daily-routine query. Cattle only; the animal's
/// breeding record, when present, drives the condition-based adjustments.
pub struct DailyRoutineHandler {
    reader: Arc<dyn HerdReader>,
    clock: Arc<dyn Clock>,
}

impl DailyRoutineHandler {
    pub fn new(reader: Arc<dyn HerdReader>, clock: Arc<dyn Clock>) -> Self {
        Self { reader, clock }
    }

    pub async fn handle(&self, query: DailyRoutineQuery) -> Result<DailyRoutine, DomainError> {
        let animal = self.reader.animal(&query.animal_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::AnimalNotFound,
                format!("Animal not found: {}", query.animal_id),
            )
        })?;
        animal.require_cattle()?;
        let cattle_type = animal.kind().cattle_type().ok_or_else(|| {
            DomainError::new(ErrorCode::NotCattle, "This operation only works for cattle animals")
        })?;

        let cow = match animal.cow_id() {
            Some(id) => self.reader.cow(&id).await?,
            None => None,
        };
        let bull = match animal.bull_id() {
            Some(id) => self.reader.bull(&id).await?,
            None => None,
        };

        Ok(daily_routine(
            cattle_type,
            &animal,
            cow.as_ref(),
            bull.as_ref(),
            self.clock.today(),
        ))
    }
}
