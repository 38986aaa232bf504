//! Vitals repository port.

use async_trait::async_trait;

use crate::domain::cattle::CattleVitals;
use crate::domain::foundation::{AnimalId, DomainError};

/// Persistence for cattle vitals checks.
#[async_trait]
pub trait VitalsRepository: Send + Sync {
    async fn record(&self, vitals: &CattleVitals) -> Result<(), DomainError>;

    /// Most recent checks for an animal, newest first.
    async fn recent_for_animal(
        &self,
        animal_id: &AnimalId,
        limit: u32,
    ) -> Result<Vec<CattleVitals>, DomainError>;
}
