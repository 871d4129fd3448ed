//! Handlers for the `/bonus-points` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hrms_core::error::CoreError;
use hrms_core::hr::{validate_month, validate_non_negative, validate_year};
use hrms_core::types::DbId;
use hrms_db::models::bonus_point::{BonusPoint, CreateBonusPoint, UpdateBonusPoint};
use hrms_db::repositories::BonusPointRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequirePrivileged;
use crate::state::AppState;

fn validate(month: Option<i32>, year: Option<i32>, points: Option<i32>) -> Result<(), CoreError> {
    if let Some(month) = month {
        validate_month(month)?;
    }
    if let Some(year) = year {
        validate_year(year)?;
    }
    if let Some(points) = points {
        validate_non_negative("points", f64::from(points))?;
    }
    Ok(())
}

/// POST /api/v1/bonus-points
pub async fn create(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Json(input): Json<CreateBonusPoint>,
) -> AppResult<(StatusCode, Json<BonusPoint>)> {
    validate(Some(input.month), Some(input.year), Some(input.points))?;
    let bonus = BonusPointRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(bonus)))
}

/// GET /api/v1/bonus-points/{id}
pub async fn get_by_id(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BonusPoint>> {
    let bonus = BonusPointRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("BonusPoint", id)))?;
    Ok(Json(bonus))
}

/// PUT /api/v1/bonus-points/{id}
pub async fn update(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBonusPoint>,
) -> AppResult<Json<BonusPoint>> {
    validate(input.month, input.year, input.points)?;
    let bonus = BonusPointRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("BonusPoint", id)))?;
    Ok(Json(bonus))
}

/// DELETE /api/v1/bonus-points/{id}
pub async fn delete(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if BonusPointRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("BonusPoint", id)))
    }
}
