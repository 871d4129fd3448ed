//! Route definitions for the `/roles` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::role;
use crate::state::AppState;

/// Routes mounted at `/roles`.
///
/// ```text
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(role::create)).route(
        "/{id}",
        get(role::get_by_id).put(role::update).delete(role::delete),
    )
}
