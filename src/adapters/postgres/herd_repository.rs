//! PostgreSQL implementation of HerdRepository.
//!
//! Each commit runs inside one transaction, so every write in a plan
//! lands together or not at all.

use async_trait::async_trait;
use sqlx::PgPool;

use super::db_error;
use super::rows::{kind_to_columns, status_to_str};
use crate::domain::cattle::{CalvingPlan, CattleRole, InseminationPlan, StatusUpdatePlan};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::HerdRepository;

/// PostgreSQL implementation of HerdRepository.
#[derive(Clone)]
pub struct PostgresHerdRepository {
    pool: PgPool,
}

impl PostgresHerdRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HerdRepository for PostgresHerdRepository {
    async fn commit_insemination(&self, plan: &InseminationPlan) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        if let Some(demotion) = &plan.demote {
            sqlx::query(
                "UPDATE inseminations SET status = 'needs_repeat', notes = $2 WHERE id = $1",
            )
            .bind(demotion.insemination_id.as_uuid())
            .bind(&demotion.notes)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to demote pending insemination", e))?;
        }

        sqlx::query(
            r#"
            INSERT INTO inseminations (
                id, cow_id, animal_id, insemination_date, status,
                bull_id, notes, performed_by, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, now())
            "#,
        )
        .bind(plan.record.id.as_uuid())
        .bind(plan.record.cow_id.as_uuid())
        .bind(plan.record.animal_id.as_uuid())
        .bind(plan.record.insemination_date)
        .bind(status_to_str(plan.record.status))
        .bind(plan.record.bull_id.map(|b| *b.as_uuid()))
        .bind(&plan.record.notes)
        .bind(&plan.record.performed_by)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to insert insemination", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit insemination", e))
    }

    async fn commit_status_update(&self, plan: &StatusUpdatePlan) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        let result = sqlx::query(
            "UPDATE inseminations SET status = $2, notes = COALESCE($3, notes) WHERE id = $1",
        )
        .bind(plan.insemination_id.as_uuid())
        .bind(status_to_str(plan.status))
        .bind(&plan.notes)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to update insemination status", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::InseminationNotFound,
                format!("Insemination record not found: {}", plan.insemination_id),
            ));
        }

        if let Some(pregnancy) = &plan.pregnancy {
            sqlx::query(
                r#"
                UPDATE cows SET
                    last_insemination_date = $2,
                    expected_calving_date = $3
                WHERE id = $1
                "#,
            )
            .bind(pregnancy.cow_id.as_uuid())
            .bind(pregnancy.last_insemination_date)
            .bind(pregnancy.expected_calving_date)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to update cow pregnancy fields", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit status update", e))
    }

    async fn commit_calving(&self, plan: &CalvingPlan) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        let result = sqlx::query(
            r#"
            UPDATE cows SET
                last_calving_date = $2,
                actual_calving_date = $2,
                last_insemination_date = NULL,
                expected_calving_date = NULL
            WHERE id = $1
            "#,
        )
        .bind(plan.cow_id.as_uuid())
        .bind(plan.calving_date)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to close pregnancy cycle", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CowNotFound,
                format!("Cow not found: {}", plan.cow_id),
            ));
        }

        sqlx::query(
            r#"
            INSERT INTO calvings (
                id, cow_id, animal_id, calving_date, is_successful,
                notes, performed_by, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, now())
            "#,
        )
        .bind(plan.log_id.as_uuid())
        .bind(plan.cow_id.as_uuid())
        .bind(plan.log_animal_id.as_uuid())
        .bind(plan.calving_date)
        .bind(plan.is_successful)
        .bind(&plan.notes)
        .bind(&plan.performed_by)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to insert calving log", e))?;

        for calf in &plan.calves {
            let (cow_id, bull_id) = match calf.role {
                CattleRole::Bull(id) => {
                    sqlx::query("INSERT INTO bulls (id) VALUES ($1)")
                        .bind(id.as_uuid())
                        .execute(&mut *tx)
                        .await
                        .map_err(|e| db_error("Failed to insert calf bull record", e))?;
                    (None, Some(*id.as_uuid()))
                }
                CattleRole::Cow(id) => {
                    sqlx::query("INSERT INTO cows (id) VALUES ($1)")
                        .bind(id.as_uuid())
                        .execute(&mut *tx)
                        .await
                        .map_err(|e| db_error("Failed to insert calf cow record", e))?;
                    (Some(*id.as_uuid()), None)
                }
            };

            let (species, animal_type) = kind_to_columns(calf.kind);
            sqlx::query(
                r#"
                INSERT INTO animals (
                    id, tag_number, farm_id, species, animal_type, name,
                    date_of_birth, mother_id, father_id, cow_id, bull_id, is_active
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, TRUE)
                "#,
            )
            .bind(calf.animal_id.as_uuid())
            .bind(&calf.tag_number)
            .bind(calf.farm_id.as_uuid())
            .bind(species)
            .bind(animal_type)
            .bind(&calf.name)
            .bind(calf.date_of_birth)
            .bind(calf.mother_id.as_uuid())
            .bind(calf.father_id.map(|f| *f.as_uuid()))
            .bind(cow_id)
            .bind(bull_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to insert calf animal", e))?;
        }

        if let Some(animal_id) = plan.promote_animal {
            // Guarded on the current type so a concurrent promotion stays
            // a no-op.
            sqlx::query(
                "UPDATE animals SET animal_type = 'Cow' WHERE id = $1 AND animal_type = 'Heifer'",
            )
            .bind(animal_id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to promote heifer", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit calving", e))
    }
}
