//! RecordVitalsHandler - Command handler for cattle vitals checks.

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::cattle::{CattleVitals, VitalsMeasurements};
use crate::domain::foundation::{AnimalId, DomainError, ErrorCode};
use crate::ports::{HerdReader, VitalsRepository};

/// Command to record one vitals check.
#[derive(Debug, Clone)]
pub struct RecordVitalsCommand {
    pub animal_id: AnimalId,
    pub measurements: VitalsMeasurements,
}

/// Handler for recording vitals. Cattle only; other species are rejected.
pub struct RecordVitalsHandler {
    reader: Arc<dyn HerdReader>,
    vitals: Arc<dyn VitalsRepository>,
}

impl RecordVitalsHandler {
    pub fn new(reader: Arc<dyn HerdReader>, vitals: Arc<dyn VitalsRepository>) -> Self {
        Self { reader, vitals }
    }

    pub async fn handle(&self, cmd: RecordVitalsCommand) -> Result<CattleVitals, DomainError> {
        let animal = self.reader.animal(&cmd.animal_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::AnimalNotFound,
                format!("Animal not found: {}", cmd.animal_id),
            )
        })?;
        animal.require_cattle()?;

        let m = cmd.measurements;
        let vitals = CattleVitals {
            id: Uuid::new_v4(),
            animal_id: cmd.animal_id,
            weight_kg: m.weight_kg,
            heart_rate: m.heart_rate,
            temperature: m.temperature,
            respiration_rate: m.respiration_rate,
            notes: m.notes,
            checked_at: m.checked_at.unwrap_or_else(Utc::now),
        };

        self.vitals.record(&vitals).await?;
        Ok(vitals)
    }
}

/// Query for an animal's recent vitals checks.
#[derive(Debug, Clone)]
pub struct RecentVitalsQuery {
    pub animal_id: AnimalId,
    pub limit: u32,
}

/// Handler listing recent vitals checks, newest first.
pub struct RecentVitalsHandler {
    vitals: Arc<dyn VitalsRepository>,
}

impl RecentVitalsHandler {
    pub fn new(vitals: Arc<dyn VitalsRepository>) -> Self {
        Self { vitals }
    }

    pub async fn handle(&self, query: RecentVitalsQuery) -> Result<Vec<CattleVitals>, DomainError> {
        self.vitals
            .recent_for_animal(&query.animal_id, query.limit)
            .await
    }
}
