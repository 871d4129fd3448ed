//! Penalty entity model and DTOs.

use hrms_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Penalty {
    pub id: DbId,
    pub penalty_level: String,
    pub description: Option<String>,
    pub penalty_date: Date,
    pub employee_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreatePenalty {
    pub penalty_level: String,
    pub description: Option<String>,
    pub penalty_date: Date,
    pub employee_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePenalty {
    pub penalty_level: Option<String>,
    pub description: Option<String>,
    pub penalty_date: Option<Date>,
    pub employee_id: Option<DbId>,
}
