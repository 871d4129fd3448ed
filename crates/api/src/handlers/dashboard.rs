//! Handler for the role-dependent dashboard.

use axum::extract::State;
use axum::Json;
use hrms_core::error::CoreError;
use hrms_core::listing::{ListingEngine, ScopeResolver};
use hrms_core::roles::{ROLE_ADMIN, ROLE_HR_STAFF};
use hrms_db::models::dashboard::{Dashboard, EmployeeStats};
use hrms_db::repositories::{DashboardRepo, DepartmentRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Dashboard>> {
    let dashboard = match auth.role.as_str() {
        ROLE_ADMIN => Dashboard::Admin {
            stats: DashboardRepo::admin_stats(&state.pool).await?,
            departments: DepartmentRepo::headcounts(&state.pool).await?,
        },
        ROLE_HR_STAFF => Dashboard::Hr {
            stats: DashboardRepo::hr_stats(&state.pool).await?,
            departments: DepartmentRepo::headcounts(&state.pool).await?,
        },
        _ => Dashboard::Employee {
            stats: own_stats(&state, &auth.scope_resolver(&state)).await?,
        },
    };
    Ok(Json(dashboard))
}

/// Counts of the actor's own records, scoped exactly like their listings.
async fn own_stats(state: &AppState, resolver: &ScopeResolver<'_>) -> AppResult<EmployeeStats> {
    let count = |entity: &'static str| async move {
        let spec = state.listings.get(entity).ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!("listing '{entity}' missing")))
        })?;
        let scope = resolver.resolve(spec).await?;
        let total = ListingEngine::count_total(&state.row_store, spec, &scope).await?;
        Ok::<_, AppError>(total)
    };

    Ok(EmployeeStats {
        attendance: count("attendance").await?,
        bonus_points: count("bonus_points").await?,
        penalties: count("penalties").await?,
    })
}
