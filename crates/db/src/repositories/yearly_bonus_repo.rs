//! Repository for the `yearly_bonus` table.

use hrms_core::types::DbId;
use sqlx::PgPool;

use crate::models::yearly_bonus::{CreateYearlyBonus, UpdateYearlyBonus, YearlyBonus};

const COLUMNS: &str =
    "id, year, total_bonus_point, yearly_bonus_score, employee_id, created_at, updated_at";

pub struct YearlyBonusRepo;

impl YearlyBonusRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateYearlyBonus,
    ) -> Result<YearlyBonus, sqlx::Error> {
        let query = format!(
            "INSERT INTO yearly_bonus (year, total_bonus_point, yearly_bonus_score, employee_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, YearlyBonus>(&query)
            .bind(input.year)
            .bind(input.total_bonus_point)
            .bind(input.yearly_bonus_score)
            .bind(input.employee_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<YearlyBonus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM yearly_bonus WHERE id = $1");
        sqlx::query_as::<_, YearlyBonus>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateYearlyBonus,
    ) -> Result<Option<YearlyBonus>, sqlx::Error> {
        let query = format!(
            "UPDATE yearly_bonus SET
                year = COALESCE($2, year),
                total_bonus_point = COALESCE($3, total_bonus_point),
                yearly_bonus_score = COALESCE($4, yearly_bonus_score),
                employee_id = COALESCE($5, employee_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, YearlyBonus>(&query)
            .bind(id)
            .bind(input.year)
            .bind(input.total_bonus_point)
            .bind(input.yearly_bonus_score)
            .bind(input.employee_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM yearly_bonus WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
