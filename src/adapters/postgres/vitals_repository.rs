//! PostgreSQL implementation of VitalsRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::db_error;
use super::rows::column;
use crate::domain::cattle::CattleVitals;
use crate::domain::foundation::{AnimalId, DomainError};
use crate::ports::VitalsRepository;

/// PostgreSQL implementation of VitalsRepository.
#[derive(Clone)]
pub struct PostgresVitalsRepository {
    pool: PgPool,
}

impl PostgresVitalsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VitalsRepository for PostgresVitalsRepository {
    async fn record(&self, vitals: &CattleVitals) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO cattle_vitals (
                id, animal_id, weight_kg, heart_rate, temperature,
                respiration_rate, notes, checked_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(vitals.id)
        .bind(vitals.animal_id.as_uuid())
        .bind(vitals.weight_kg)
        .bind(vitals.heart_rate)
        .bind(vitals.temperature)
        .bind(vitals.respiration_rate)
        .bind(&vitals.notes)
        .bind(vitals.checked_at)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert vitals record", e))?;

        Ok(())
    }

    async fn recent_for_animal(
        &self,
        animal_id: &AnimalId,
        limit: u32,
    ) -> Result<Vec<CattleVitals>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM cattle_vitals
            WHERE animal_id = $1
            ORDER BY checked_at DESC
            LIMIT $2
            "#,
        )
        .bind(animal_id.as_uuid())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch vitals records", e))?;

        rows.into_iter()
            .map(|row| {
                let id: Uuid = column(&row, "id")?;
                let animal_id: Uuid = column(&row, "animal_id")?;
                let checked_at: DateTime<Utc> = column(&row, "checked_at")?;
                Ok(CattleVitals {
                    id,
                    animal_id: AnimalId::from_uuid(animal_id),
                    weight_kg: column(&row, "weight_kg")?,
                    heart_rate: column(&row, "heart_rate")?,
                    temperature: column(&row, "temperature")?,
                    respiration_rate: column(&row, "respiration_rate")?,
                    notes: column(&row, "notes")?,
                    checked_at,
                })
            })
            .collect()
    }
}
