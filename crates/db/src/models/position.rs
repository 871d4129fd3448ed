//! Position entity model and DTOs.

use hrms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A position row from the `positions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Position {
    pub id: DbId,
    pub name: String,
    pub base_salary: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreatePosition {
    pub name: String,
    pub base_salary: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePosition {
    pub name: Option<String>,
    pub base_salary: Option<f64>,
}
