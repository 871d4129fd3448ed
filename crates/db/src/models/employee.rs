//! Employee entity model and DTOs.

use hrms_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An employee row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
    pub start_date: Date,
    pub department_id: DbId,
    pub position_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Employee joined with department and position names, as shown on the
/// profile page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployeeProfile {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
    pub start_date: Date,
    pub department_name: String,
    pub position_name: String,
}

/// `id` + full name pair for employee pickers.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployeeOption {
    pub id: DbId,
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
    pub start_date: Date,
    pub department_id: DbId,
    pub position_id: DbId,
}

/// DTO for updating an employee. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateEmployee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub salary: Option<f64>,
    pub start_date: Option<Date>,
    pub department_id: Option<DbId>,
    pub position_id: Option<DbId>,
}
