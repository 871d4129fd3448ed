//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `Admin` role.
//! - [`rbac::RequirePrivileged`] -- Requires `Admin` or `HR Staff`.

pub mod auth;
pub mod rbac;
