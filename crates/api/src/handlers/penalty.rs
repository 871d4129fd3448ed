//! Handlers for the `/penalties` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hrms_core::error::CoreError;
use hrms_core::hr::validate_penalty_level;
use hrms_core::types::DbId;
use hrms_db::models::penalty::{CreatePenalty, Penalty, UpdatePenalty};
use hrms_db::repositories::PenaltyRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequirePrivileged;
use crate::state::AppState;

/// POST /api/v1/penalties
pub async fn create(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Json(input): Json<CreatePenalty>,
) -> AppResult<(StatusCode, Json<Penalty>)> {
    validate_penalty_level(&input.penalty_level)?;
    let penalty = PenaltyRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(penalty)))
}

/// GET /api/v1/penalties/{id}
pub async fn get_by_id(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Penalty>> {
    let penalty = PenaltyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Penalty", id)))?;
    Ok(Json(penalty))
}

/// PUT /api/v1/penalties/{id}
pub async fn update(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePenalty>,
) -> AppResult<Json<Penalty>> {
    if let Some(level) = &input.penalty_level {
        validate_penalty_level(level)?;
    }
    let penalty = PenaltyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Penalty", id)))?;
    Ok(Json(penalty))
}

/// DELETE /api/v1/penalties/{id}
pub async fn delete(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PenaltyRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Penalty", id)))
    }
}
