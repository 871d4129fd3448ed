//! First-run administrator account.
//!
//! A fresh database has roles but no users, and every user-management route
//! requires an Admin token. When configured, startup creates one Admin
//! account so the system can be reached at all.

use hrms_core::error::CoreError;
use hrms_core::hr::{validate_password, validate_username};
use hrms_core::roles::ROLE_ADMIN;
use hrms_db::models::user::CreateUser;
use hrms_db::repositories::{RoleRepo, UserRepo};
use hrms_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Credentials for the first-run administrator.
#[derive(Debug, Clone)]
pub struct BootstrapAdmin {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl BootstrapAdmin {
    /// Read the account from the environment.
    ///
    /// | Env Var                      | Required                        |
    /// |------------------------------|---------------------------------|
    /// | `BOOTSTRAP_ADMIN_USERNAME`   | enables bootstrapping           |
    /// | `BOOTSTRAP_ADMIN_PASSWORD`   | yes, if username is set         |
    /// | `BOOTSTRAP_ADMIN_EMAIL`      | no (`<username>@localhost`)     |
    ///
    /// # Panics
    ///
    /// Panics if a username is configured without a password.
    pub fn from_env() -> Option<Self> {
        let username = std::env::var("BOOTSTRAP_ADMIN_USERNAME")
            .ok()
            .filter(|u| !u.trim().is_empty())?;
        let password = std::env::var("BOOTSTRAP_ADMIN_PASSWORD")
            .expect("BOOTSTRAP_ADMIN_PASSWORD must be set when BOOTSTRAP_ADMIN_USERNAME is");
        let email = std::env::var("BOOTSTRAP_ADMIN_EMAIL")
            .unwrap_or_else(|_| format!("{username}@localhost"));
        Some(Self {
            username,
            password,
            email,
        })
    }
}

/// Create the administrator unless a user with that username exists.
///
/// Returns `true` when an account was created.
pub async fn ensure_admin(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<bool> {
    if UserRepo::find_by_username(pool, &admin.username)
        .await?
        .is_some()
    {
        return Ok(false);
    }

    validate_username(&admin.username)?;
    validate_password(&admin.password)?;

    let role = RoleRepo::find_by_name(pool, ROLE_ADMIN)
        .await?
        .ok_or_else(|| CoreError::Internal(format!("role '{ROLE_ADMIN}' is not seeded")))?;
    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: admin.username.clone(),
            email: admin.email.clone(),
            password_hash,
            role_id: role.id,
            employee_id: None,
        },
    )
    .await?;
    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap administrator created");
    Ok(true)
}
