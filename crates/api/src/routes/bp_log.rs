//! Route definitions for the `/bp` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::bp_log;
use crate::state::AppState;

/// Routes mounted at `/bp`.
///
/// ```text
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(bp_log::create)).route(
        "/{id}",
        get(bp_log::get_by_id).put(bp_log::update).delete(bp_log::delete),
    )
}
