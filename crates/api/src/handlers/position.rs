//! Handlers for the `/positions` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hrms_core::error::CoreError;
use hrms_core::hr::{validate_non_negative, validate_required};
use hrms_core::types::DbId;
use hrms_db::models::position::{CreatePosition, Position, UpdatePosition};
use hrms_db::repositories::PositionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequirePrivileged;
use crate::state::AppState;

/// POST /api/v1/positions
pub async fn create(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Json(input): Json<CreatePosition>,
) -> AppResult<(StatusCode, Json<Position>)> {
    validate_required("name", &input.name)?;
    validate_non_negative("base_salary", input.base_salary)?;
    let position = PositionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(position)))
}

/// GET /api/v1/positions/{id}
pub async fn get_by_id(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Position>> {
    let position = PositionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Position", id)))?;
    Ok(Json(position))
}

/// PUT /api/v1/positions/{id}
pub async fn update(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePosition>,
) -> AppResult<Json<Position>> {
    if let Some(name) = &input.name {
        validate_required("name", name)?;
    }
    if let Some(base_salary) = input.base_salary {
        validate_non_negative("base_salary", base_salary)?;
    }
    let position = PositionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Position", id)))?;
    Ok(Json(position))
}

/// DELETE /api/v1/positions/{id}
pub async fn delete(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PositionRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Position", id)))
    }
}
