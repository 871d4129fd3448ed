//! Monthly bonus point model and DTOs.

use hrms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Bonus points awarded to an employee for one month.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BonusPoint {
    pub id: DbId,
    pub month: i32,
    pub year: i32,
    pub points: i32,
    pub employee_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateBonusPoint {
    pub month: i32,
    pub year: i32,
    pub points: i32,
    pub employee_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBonusPoint {
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub points: Option<i32>,
    pub employee_id: Option<DbId>,
}
