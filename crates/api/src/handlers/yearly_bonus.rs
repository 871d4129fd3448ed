//! Handlers for the `/yearly-bonus` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hrms_core::error::CoreError;
use hrms_core::hr::{validate_non_negative, validate_year};
use hrms_core::types::DbId;
use hrms_db::models::yearly_bonus::{CreateYearlyBonus, UpdateYearlyBonus, YearlyBonus};
use hrms_db::repositories::YearlyBonusRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequirePrivileged;
use crate::state::AppState;

/// POST /api/v1/yearly-bonus
pub async fn create(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Json(input): Json<CreateYearlyBonus>,
) -> AppResult<(StatusCode, Json<YearlyBonus>)> {
    validate_year(input.year)?;
    validate_non_negative("yearly_bonus_score", input.yearly_bonus_score)?;
    let bonus = YearlyBonusRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(bonus)))
}

/// GET /api/v1/yearly-bonus/{id}
pub async fn get_by_id(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<YearlyBonus>> {
    let bonus = YearlyBonusRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("YearlyBonus", id)))?;
    Ok(Json(bonus))
}

/// PUT /api/v1/yearly-bonus/{id}
pub async fn update(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateYearlyBonus>,
) -> AppResult<Json<YearlyBonus>> {
    if let Some(year) = input.year {
        validate_year(year)?;
    }
    if let Some(score) = input.yearly_bonus_score {
        validate_non_negative("yearly_bonus_score", score)?;
    }
    let bonus = YearlyBonusRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("YearlyBonus", id)))?;
    Ok(Json(bonus))
}

/// DELETE /api/v1/yearly-bonus/{id}
pub async fn delete(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if YearlyBonusRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("YearlyBonus", id)))
    }
}
