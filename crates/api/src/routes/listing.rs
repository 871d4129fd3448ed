use axum::routing::get;
use axum::Router;

use crate::handlers::listing;
use crate::state::AppState;

/// Routes mounted at `/listings`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{entity}", get(listing::list))
}
