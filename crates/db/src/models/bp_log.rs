//! Bonus/penalty log model and DTOs.

use hrms_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A log entry pointing at either a `bonus_points` or a `penalties` row.
///
/// `reference_id` is not a foreign key: the referenced table depends on
/// `entry_type`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BpLogEntry {
    pub id: DbId,
    pub entry_type: String,
    pub reference_id: DbId,
    pub entry_date: Date,
    pub employee_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateBpLogEntry {
    pub entry_type: String,
    pub reference_id: DbId,
    /// Defaults to the current date.
    pub entry_date: Option<Date>,
    pub employee_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBpLogEntry {
    pub entry_type: Option<String>,
    pub reference_id: Option<DbId>,
    pub entry_date: Option<Date>,
    pub employee_id: Option<DbId>,
}
