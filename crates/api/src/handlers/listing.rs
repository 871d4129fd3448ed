//! Handler for the generic listing endpoint.

use axum::extract::{Path, Query, State};
use axum::Json;
use hrms_core::error::CoreError;
use hrms_core::listing::{
    ListingEngine, ListingError, ListingParams, ListingRequest, ListingResult,
};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/listings/{entity}
///
/// Order of checks: unknown entity (404), role not allowed (403), bad
/// paging or search input (400). None of these touch the database.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(entity): Path<String>,
    Query(params): Query<ListingParams>,
) -> AppResult<Json<ListingResult>> {
    let spec = state
        .listings
        .get(&entity)
        .ok_or(ListingError::UnknownEntity(entity))?;

    if !spec.allows_role(&auth.role) {
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "Role '{}' may not list {}",
            auth.role, spec.entity
        ))));
    }

    let request = ListingRequest::try_from(params)?;

    let scope = auth.scope_resolver(&state).resolve(spec).await?;
    let result = ListingEngine::list(&state.row_store, spec, &scope, &request).await?;
    Ok(Json(result))
}
