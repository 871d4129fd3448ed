//! Handlers for the `/departments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hrms_core::error::CoreError;
use hrms_core::hr::validate_required;
use hrms_core::types::DbId;
use hrms_db::models::department::{CreateDepartment, Department, UpdateDepartment};
use hrms_db::repositories::DepartmentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequirePrivileged;
use crate::state::AppState;

/// POST /api/v1/departments
pub async fn create(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Json(input): Json<CreateDepartment>,
) -> AppResult<(StatusCode, Json<Department>)> {
    validate_required("name", &input.name)?;
    let department = DepartmentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(department)))
}

/// GET /api/v1/departments/{id}
pub async fn get_by_id(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Department>> {
    let department = DepartmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Department", id)))?;
    Ok(Json(department))
}

/// PUT /api/v1/departments/{id}
pub async fn update(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDepartment>,
) -> AppResult<Json<Department>> {
    if let Some(name) = &input.name {
        validate_required("name", name)?;
    }
    let department = DepartmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Department", id)))?;
    Ok(Json(department))
}

/// DELETE /api/v1/departments/{id}
///
/// Fails with 409 while employees still belong to the department.
pub async fn delete(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DepartmentRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Department", id)))
    }
}
