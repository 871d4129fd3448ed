//! Handlers for the `/bp` resource (bonus/penalty log).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hrms_core::error::CoreError;
use hrms_core::hr::validate_bp_entry_type;
use hrms_core::types::DbId;
use hrms_db::models::bp_log::{BpLogEntry, CreateBpLogEntry, UpdateBpLogEntry};
use hrms_db::repositories::BpLogRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequirePrivileged;
use crate::state::AppState;

/// POST /api/v1/bp
pub async fn create(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Json(input): Json<CreateBpLogEntry>,
) -> AppResult<(StatusCode, Json<BpLogEntry>)> {
    validate_bp_entry_type(&input.entry_type)?;
    let entry = BpLogRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/bp/{id}
pub async fn get_by_id(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BpLogEntry>> {
    let entry = BpLogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("BpLogEntry", id)))?;
    Ok(Json(entry))
}

/// PUT /api/v1/bp/{id}
pub async fn update(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBpLogEntry>,
) -> AppResult<Json<BpLogEntry>> {
    if let Some(entry_type) = &input.entry_type {
        validate_bp_entry_type(entry_type)?;
    }
    let entry = BpLogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("BpLogEntry", id)))?;
    Ok(Json(entry))
}

/// DELETE /api/v1/bp/{id}
pub async fn delete(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if BpLogRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("BpLogEntry", id)))
    }
}
