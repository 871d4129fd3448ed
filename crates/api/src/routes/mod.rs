pub mod attendance;
pub mod auth;
pub mod bonus_point;
pub mod bp_log;
pub mod department;
pub mod employee;
pub mod health;
pub mod listing;
pub mod penalty;
pub mod position;
pub mod role;
pub mod user;
pub mod yearly_bonus;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                         login (public)
/// /auth/me                            current user
///
/// /listings/{entity}                  paged, searched, scoped listing
/// /dashboard                          role-dependent counts
///
/// /roles, /users                      create; get, update, delete by id (Admin)
/// /departments, /positions            create; get, update, delete by id (Admin, HR Staff)
/// /employees                          create; get, update, delete by id (Admin, HR Staff)
/// /employees/options                  id + full name pairs (Admin, HR Staff)
/// /employees/me                       own profile (any role)
/// /attendance, /bonus-points,
/// /penalties, /bp, /yearly-bonus      create; get, update, delete by id (Admin, HR Staff)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/listings", listing::router())
        .route("/dashboard", get(handlers::dashboard::get_dashboard))
        .nest("/roles", role::router())
        .nest("/users", user::router())
        .nest("/departments", department::router())
        .nest("/positions", position::router())
        .nest("/employees", employee::router())
        .nest("/attendance", attendance::router())
        .nest("/bonus-points", bonus_point::router())
        .nest("/penalties", penalty::router())
        .nest("/bp", bp_log::router())
        .nest("/yearly-bonus", yearly_bonus::router())
}
