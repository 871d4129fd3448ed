//! Repository for the `penalties` table.

use hrms_core::types::DbId;
use sqlx::PgPool;

use crate::models::penalty::{CreatePenalty, Penalty, UpdatePenalty};

const COLUMNS: &str =
    "id, penalty_level, description, penalty_date, employee_id, created_at, updated_at";

pub struct PenaltyRepo;

impl PenaltyRepo {
    pub async fn create(pool: &PgPool, input: &CreatePenalty) -> Result<Penalty, sqlx::Error> {
        let query = format!(
            "INSERT INTO penalties (penalty_level, description, penalty_date, employee_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Penalty>(&query)
            .bind(&input.penalty_level)
            .bind(&input.description)
            .bind(input.penalty_date)
            .bind(input.employee_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Penalty>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM penalties WHERE id = $1");
        sqlx::query_as::<_, Penalty>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePenalty,
    ) -> Result<Option<Penalty>, sqlx::Error> {
        let query = format!(
            "UPDATE penalties SET
                penalty_level = COALESCE($2, penalty_level),
                description = COALESCE($3, description),
                penalty_date = COALESCE($4, penalty_date),
                employee_id = COALESCE($5, employee_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Penalty>(&query)
            .bind(id)
            .bind(&input.penalty_level)
            .bind(&input.description)
            .bind(input.penalty_date)
            .bind(input.employee_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM penalties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
