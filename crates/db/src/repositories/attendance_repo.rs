//! Repository for the `attendance` table.

use hrms_core::types::DbId;
use sqlx::PgPool;

use crate::models::attendance::{Attendance, CreateAttendance, UpdateAttendance};

const COLUMNS: &str = "id, attendance_date, status, employee_id, created_at, updated_at";

pub struct AttendanceRepo;

impl AttendanceRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateAttendance,
    ) -> Result<Attendance, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance (attendance_date, status, employee_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attendance>(&query)
            .bind(input.attendance_date)
            .bind(&input.status)
            .bind(input.employee_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Attendance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attendance WHERE id = $1");
        sqlx::query_as::<_, Attendance>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAttendance,
    ) -> Result<Option<Attendance>, sqlx::Error> {
        let query = format!(
            "UPDATE attendance SET
                attendance_date = COALESCE($2, attendance_date),
                status = COALESCE($3, status),
                employee_id = COALESCE($4, employee_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attendance>(&query)
            .bind(id)
            .bind(input.attendance_date)
            .bind(&input.status)
            .bind(input.employee_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attendance WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
