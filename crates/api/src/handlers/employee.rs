//! Handlers for the `/employees` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hrms_core::error::CoreError;
use hrms_core::hr::{validate_non_negative, validate_required};
use hrms_core::types::DbId;
use hrms_db::models::employee::{
    CreateEmployee, Employee, EmployeeOption, EmployeeProfile, UpdateEmployee,
};
use hrms_db::repositories::EmployeeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequirePrivileged;
use crate::state::AppState;

/// POST /api/v1/employees
pub async fn create(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    validate_required("first_name", &input.first_name)?;
    validate_required("last_name", &input.last_name)?;
    validate_non_negative("salary", input.salary)?;
    let employee = EmployeeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/v1/employees/options
///
/// `id` + full name pairs for pickers in record forms.
pub async fn options(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EmployeeOption>>> {
    Ok(Json(EmployeeRepo::list_options(&state.pool).await?))
}

/// GET /api/v1/employees/me
///
/// The caller's own profile, via the same owner lookup listings use.
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<EmployeeProfile>> {
    let employee_id = auth
        .scope_resolver(&state)
        .owner_id()
        .await?
        .ok_or(AppError::Core(CoreError::not_found(
            "Employee linked to user",
            auth.user_id,
        )))?;
    let profile = EmployeeRepo::find_profile(&state.pool, employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Employee", employee_id)))?;
    Ok(Json(profile))
}

/// GET /api/v1/employees/{id}
pub async fn get_by_id(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Employee>> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Employee", id)))?;
    Ok(Json(employee))
}

/// PUT /api/v1/employees/{id}
pub async fn update(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<Json<Employee>> {
    if let Some(first_name) = &input.first_name {
        validate_required("first_name", first_name)?;
    }
    if let Some(last_name) = &input.last_name {
        validate_required("last_name", last_name)?;
    }
    if let Some(salary) = input.salary {
        validate_non_negative("salary", salary)?;
    }
    let employee = EmployeeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Employee", id)))?;
    Ok(Json(employee))
}

/// DELETE /api/v1/employees/{id}
///
/// Owned records are removed with the employee; linked users are unlinked.
pub async fn delete(
    RequirePrivileged(_user): RequirePrivileged,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if EmployeeRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Employee", id)))
    }
}
