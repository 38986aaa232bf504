//! PostgreSQL implementation of HerdReader.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use super::rows::{row_to_animal, row_to_bull, row_to_cow, row_to_insemination};
use super::db_error;
use crate::domain::cattle::{Animal, Bull, Cow, Insemination, SireRef};
use crate::domain::foundation::{
    AnimalId, BullId, CowId, DateWindow, DomainError, FarmId, InseminationId,
};
use crate::ports::{CowRecord, HerdReader};

/// PostgreSQL implementation of HerdReader.
#[derive(Clone)]
pub struct PostgresHerdReader {
    pool: PgPool,
}

impl PostgresHerdReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Assembles the relationships for one cow.
    async fn record_for(&self, cow: Cow) -> Result<CowRecord, DomainError> {
        let animal = self.animal_for_cow(&cow.id).await?;
        let latest_insemination = self.latest_insemination(&cow.id).await?;
        let latest_sire = match &latest_insemination {
            Some(record) => self.sire_for(record).await?,
            None => None,
        };
        Ok(CowRecord {
            cow,
            animal,
            latest_insemination,
            latest_sire,
        })
    }

    async fn sire_for(&self, record: &Insemination) -> Result<Option<SireRef>, DomainError> {
        let Some(bull_id) = record.bull_id else {
            return Ok(None);
        };
        let row = sqlx::query("SELECT * FROM animals WHERE bull_id = $1")
            .bind(bull_id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch sire animal", e))?;

        match row {
            Some(row) => {
                let animal = row_to_animal(row)?;
                Ok(Some(SireRef {
                    bull_id,
                    tag_number: animal.tag_number().to_string(),
                    name: animal.name().map(String::from),
                }))
            }
            None => Ok(None),
        }
    }

    async fn latest_with_status(
        &self,
        cow_id: &CowId,
        status: &str,
    ) -> Result<Option<Insemination>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT * FROM inseminations
            WHERE cow_id = $1 AND status = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(cow_id.as_uuid())
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch insemination by status", e))?;

        row.map(row_to_insemination).transpose()
    }
}

#[async_trait]
impl HerdReader for PostgresHerdReader {
    async fn cow(&self, id: &CowId) -> Result<Option<Cow>, DomainError> {
        let row = sqlx::query("SELECT * FROM cows WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch cow", e))?;

        row.map(row_to_cow).transpose()
    }

    async fn animal_for_cow(&self, id: &CowId) -> Result<Option<Animal>, DomainError> {
        let row = sqlx::query("SELECT * FROM animals WHERE cow_id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch animal for cow", e))?;

        row.map(row_to_animal).transpose()
    }

    async fn animal(&self, id: &AnimalId) -> Result<Option<Animal>, DomainError> {
        let row = sqlx::query("SELECT * FROM animals WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch animal", e))?;

        row.map(row_to_animal).transpose()
    }

    async fn bull(&self, id: &BullId) -> Result<Option<Bull>, DomainError> {
        let row = sqlx::query("SELECT * FROM bulls WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch bull", e))?;

        row.map(row_to_bull).transpose()
    }

    async fn cows_in_final_month(
        &self,
        window: DateWindow,
        farm_id: Option<&FarmId>,
    ) -> Result<Vec<CowRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT c.* FROM cows c
            JOIN animals a ON a.cow_id = c.id
            WHERE c.last_insemination_date BETWEEN $1 AND $2
              AND ($3::uuid IS NULL OR a.farm_id = $3)
            "#,
        )
        .bind(window.start)
        .bind(window.end)
        .bind(farm_id.map(|f| *f.as_uuid()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch cows in final month", e))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(self.record_for(row_to_cow(row)?).await?);
        }
        Ok(records)
    }

    async fn breeding_eligible_cows(
        &self,
        farm_id: Option<&FarmId>,
    ) -> Result<Vec<CowRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT c.* FROM cows c
            JOIN animals a ON a.cow_id = c.id
            WHERE c.last_calving_date IS NOT NULL
              AND c.last_insemination_date IS NULL
              AND c.actual_calving_date IS NULL
              AND ($1::uuid IS NULL OR a.farm_id = $1)
            "#,
        )
        .bind(farm_id.map(|f| *f.as_uuid()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch breeding-eligible cows", e))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(self.record_for(row_to_cow(row)?).await?);
        }
        Ok(records)
    }

    async fn insemination(&self, id: &InseminationId) -> Result<Option<Insemination>, DomainError> {
        let row = sqlx::query("SELECT * FROM inseminations WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch insemination", e))?;

        row.map(row_to_insemination).transpose()
    }

    async fn latest_insemination(
        &self,
        cow_id: &CowId,
    ) -> Result<Option<Insemination>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT * FROM inseminations
            WHERE cow_id = $1
            ORDER BY insemination_date DESC, created_at DESC
            LIMIT 1
            "#,
        )
        .bind(cow_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch latest insemination", e))?;

        row.map(row_to_insemination).transpose()
    }

    async fn latest_pending_insemination(
        &self,
        cow_id: &CowId,
    ) -> Result<Option<Insemination>, DomainError> {
        self.latest_with_status(cow_id, "pending").await
    }

    async fn latest_confirmed_insemination(
        &self,
        cow_id: &CowId,
    ) -> Result<Option<Insemination>, DomainError> {
        self.latest_with_status(cow_id, "confirmed").await
    }

    async fn confirmed_insemination_on(
        &self,
        cow_id: &CowId,
        date: NaiveDate,
    ) -> Result<Option<Insemination>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT * FROM inseminations
            WHERE cow_id = $1 AND status = 'confirmed' AND insemination_date = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(cow_id.as_uuid())
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch confirmed insemination", e))?;

        row.map(row_to_insemination).transpose()
    }

    async fn bull_animal(
        &self,
        bull_id: &BullId,
        farm_id: &FarmId,
    ) -> Result<Option<Animal>, DomainError> {
        let row = sqlx::query("SELECT * FROM animals WHERE bull_id = $1 AND farm_id = $2")
            .bind(bull_id.as_uuid())
            .bind(farm_id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch bull animal", e))?;

        row.map(row_to_animal).transpose()
    }

    async fn farm_ids(&self) -> Result<Vec<FarmId>, DomainError> {
        let rows: Vec<(Uuid,)> = sqlx::query_as("SELECT id FROM farms ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch farm ids", e))?;

        Ok(rows.into_iter().map(|(id,)| FarmId::from_uuid(id)).collect())
    }
}
