//! Department entity model and DTOs.

use hrms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A department row from the `departments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateDepartment {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDepartment {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Employee headcount for one department (dashboard widget).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentHeadcount {
    pub department_id: DbId,
    pub department_name: String,
    pub employee_count: i64,
}
