//! Route definitions for the `/penalties` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::penalty;
use crate::state::AppState;

/// Routes mounted at `/penalties`.
///
/// ```text
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(penalty::create)).route(
        "/{id}",
        get(penalty::get_by_id).put(penalty::update).delete(penalty::delete),
    )
}
