//! HTTP-level tests for login, `/auth/me`, RBAC rejection and bootstrap.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, TEST_PASSWORD};
use hrms_api::bootstrap::{ensure_admin, BootstrapAdmin};
use hrms_core::roles::{ROLE_ADMIN, ROLE_EMPLOYEE};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let employee_id = common::seed_employee(&pool, "Ann", "Smith").await;
    let user_id = common::create_user(&pool, "ann", ROLE_EMPLOYEE, Some(employee_id)).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "username": "ann", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["expires_in"], 3600);
    assert_eq!(json["user"]["id"], user_id);
    assert_eq!(json["user"]["role"], "Employee");
    assert_eq!(json["user"]["employee_id"], employee_id);
    assert!(json["user"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    common::create_user(&pool, "wrongpw", ROLE_EMPLOYEE, None).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "username": "wrongpw", "password": "incorrect" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_user(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "username": "ghost", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_token_opens_protected_routes(pool: PgPool) {
    common::create_user(&pool, "boss", ROLE_ADMIN, None).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/login",
        serde_json::json!({ "username": "boss", "password": TEST_PASSWORD }),
    )
    .await;
    let token = body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = get_auth(common::build_test_app(pool), "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["username"], "boss");
    assert_eq!(json["role"], "Admin");
}

// ---------------------------------------------------------------------------
// Token handling
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_or_bad_token_is_401(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/auth/me",
        "not-a-jwt",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_routes_reject_other_roles(pool: PgPool) {
    let user_id = common::create_user(&pool, "emp", ROLE_EMPLOYEE, None).await;
    let token = common::token_for(user_id, ROLE_EMPLOYEE);

    let response = get_auth(common::build_test_app(pool), "/api/v1/users/1", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "FORBIDDEN");
}

// ---------------------------------------------------------------------------
// Bootstrap administrator
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap_admin_is_created_once(pool: PgPool) {
    let admin = BootstrapAdmin {
        username: "admin".into(),
        password: "initial-password".into(),
        email: "admin@hrapp.com".into(),
    };

    assert!(ensure_admin(&pool, &admin).await.unwrap());
    assert!(!ensure_admin(&pool, &admin).await.unwrap());

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/login",
        serde_json::json!({ "username": "admin", "password": "initial-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["user"]["role"], "Admin");
}
