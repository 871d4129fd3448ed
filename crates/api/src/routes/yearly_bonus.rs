//! Route definitions for the `/yearly-bonus` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::yearly_bonus;
use crate::state::AppState;

/// Routes mounted at `/yearly-bonus`.
///
/// ```text
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(yearly_bonus::create)).route(
        "/{id}",
        get(yearly_bonus::get_by_id).put(yearly_bonus::update).delete(yearly_bonus::delete),
    )
}
