//! Route definitions for the `/departments` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::department;
use crate::state::AppState;

/// Routes mounted at `/departments`.
///
/// ```text
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(department::create)).route(
        "/{id}",
        get(department::get_by_id).put(department::update).delete(department::delete),
    )
}
