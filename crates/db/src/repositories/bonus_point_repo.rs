//! Repository for the `bonus_points` table.

use hrms_core::types::DbId;
use sqlx::PgPool;

use crate::models::bonus_point::{BonusPoint, CreateBonusPoint, UpdateBonusPoint};

const COLUMNS: &str = "id, month, year, points, employee_id, created_at, updated_at";

pub struct BonusPointRepo;

impl BonusPointRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateBonusPoint,
    ) -> Result<BonusPoint, sqlx::Error> {
        let query = format!(
            "INSERT INTO bonus_points (month, year, points, employee_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BonusPoint>(&query)
            .bind(input.month)
            .bind(input.year)
            .bind(input.points)
            .bind(input.employee_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BonusPoint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bonus_points WHERE id = $1");
        sqlx::query_as::<_, BonusPoint>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBonusPoint,
    ) -> Result<Option<BonusPoint>, sqlx::Error> {
        let query = format!(
            "UPDATE bonus_points SET
                month = COALESCE($2, month),
                year = COALESCE($3, year),
                points = COALESCE($4, points),
                employee_id = COALESCE($5, employee_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BonusPoint>(&query)
            .bind(id)
            .bind(input.month)
            .bind(input.year)
            .bind(input.points)
            .bind(input.employee_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bonus_points WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
