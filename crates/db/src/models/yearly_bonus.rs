//! Yearly bonus model and DTOs.

use hrms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct YearlyBonus {
    pub id: DbId,
    pub year: i32,
    pub total_bonus_point: i32,
    pub yearly_bonus_score: f64,
    pub employee_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateYearlyBonus {
    pub year: i32,
    pub total_bonus_point: i32,
    pub yearly_bonus_score: f64,
    pub employee_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct UpdateYearlyBonus {
    pub year: Option<i32>,
    pub total_bonus_point: Option<i32>,
    pub yearly_bonus_score: Option<f64>,
    pub employee_id: Option<DbId>,
}
