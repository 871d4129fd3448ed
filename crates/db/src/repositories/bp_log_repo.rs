//! Repository for the `bp_log` table.

use hrms_core::types::DbId;
use sqlx::PgPool;

use crate::models::bp_log::{BpLogEntry, CreateBpLogEntry, UpdateBpLogEntry};

const COLUMNS: &str =
    "id, entry_type, reference_id, entry_date, employee_id, created_at, updated_at";

pub struct BpLogRepo;

impl BpLogRepo {
    /// Insert a log entry. A missing `entry_date` defaults to today.
    pub async fn create(pool: &PgPool, input: &CreateBpLogEntry) -> Result<BpLogEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO bp_log (entry_type, reference_id, entry_date, employee_id)
             VALUES ($1, $2, COALESCE($3, CURRENT_DATE), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BpLogEntry>(&query)
            .bind(&input.entry_type)
            .bind(input.reference_id)
            .bind(input.entry_date)
            .bind(input.employee_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BpLogEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bp_log WHERE id = $1");
        sqlx::query_as::<_, BpLogEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBpLogEntry,
    ) -> Result<Option<BpLogEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE bp_log SET
                entry_type = COALESCE($2, entry_type),
                reference_id = COALESCE($3, reference_id),
                entry_date = COALESCE($4, entry_date),
                employee_id = COALESCE($5, employee_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BpLogEntry>(&query)
            .bind(id)
            .bind(&input.entry_type)
            .bind(input.reference_id)
            .bind(input.entry_date)
            .bind(input.employee_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bp_log WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
