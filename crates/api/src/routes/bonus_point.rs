//! Route definitions for the `/bonus-points` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::bonus_point;
use crate::state::AppState;

/// Routes mounted at `/bonus-points`.
///
/// ```text
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(bonus_point::create)).route(
        "/{id}",
        get(bonus_point::get_by_id).put(bonus_point::update).delete(bonus_point::delete),
    )
}
