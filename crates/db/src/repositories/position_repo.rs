//! Repository for the `positions` table.

use hrms_core::types::DbId;
use sqlx::PgPool;

use crate::models::position::{CreatePosition, Position, UpdatePosition};

const COLUMNS: &str = "id, name, base_salary, created_at, updated_at";

pub struct PositionRepo;

impl PositionRepo {
    pub async fn create(pool: &PgPool, input: &CreatePosition) -> Result<Position, sqlx::Error> {
        let query = format!(
            "INSERT INTO positions (name, base_salary) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Position>(&query)
            .bind(&input.name)
            .bind(input.base_salary)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Position>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM positions WHERE id = $1");
        sqlx::query_as::<_, Position>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePosition,
    ) -> Result<Option<Position>, sqlx::Error> {
        let query = format!(
            "UPDATE positions SET
                name = COALESCE($2, name),
                base_salary = COALESCE($3, base_salary)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Position>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.base_salary)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM positions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
