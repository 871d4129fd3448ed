//! Route definitions for the `/positions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::position;
use crate::state::AppState;

/// Routes mounted at `/positions`.
///
/// ```text
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(position::create)).route(
        "/{id}",
        get(position::get_by_id).put(position::update).delete(position::delete),
    )
}
