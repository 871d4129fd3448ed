//! Attendance entity model and DTOs.

use hrms_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One employee's attendance for one day.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attendance {
    pub id: DbId,
    pub attendance_date: Date,
    pub status: String,
    pub employee_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateAttendance {
    pub attendance_date: Date,
    pub status: String,
    pub employee_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAttendance {
    pub attendance_date: Option<Date>,
    pub status: Option<String>,
    pub employee_id: Option<DbId>,
}
