//! Handlers for the `/attendance` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hrms_core::error::CoreError;
use hrms_core::hr::validate_attendance_status;
use hrms_core::types::DbId;
use hrms_db::models::attendance::{Attendance, CreateAttendance, UpdateAttendance};
use hrms_db::repositories::AttendanceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequirePrivileged;
use crate::state::AppState;

/// POST /api/v1/attendance
pub async fn create(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Json(input): Json<CreateAttendance>,
) -> AppResult<(StatusCode, Json<Attendance>)> {
    validate_attendance_status(&input.status)?;
    let attendance = AttendanceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(attendance)))
}

/// GET /api/v1/attendance/{id}
pub async fn get_by_id(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Attendance>> {
    let attendance = AttendanceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Attendance", id)))?;
    Ok(Json(attendance))
}

/// PUT /api/v1/attendance/{id}
pub async fn update(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAttendance>,
) -> AppResult<Json<Attendance>> {
    if let Some(status) = &input.status {
        validate_attendance_status(status)?;
    }
    let attendance = AttendanceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Attendance", id)))?;
    Ok(Json(attendance))
}

/// DELETE /api/v1/attendance/{id}
pub async fn delete(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if AttendanceRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Attendance", id)))
    }
}
