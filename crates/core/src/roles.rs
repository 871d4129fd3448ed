//! Well-known role name constants.
//!
//! These must match the seed data in `20261001000001_create_roles_table.sql`.

pub const ROLE_ADMIN: &str = "Admin";
pub const ROLE_HR_STAFF: &str = "HR Staff";
pub const ROLE_EMPLOYEE: &str = "Employee";

/// Roles that see every row of every entity.
pub const PRIVILEGED_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_HR_STAFF];

/// Whether `role` belongs to the privileged set.
pub fn is_privileged(role: &str) -> bool {
    PRIVILEGED_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_hr_staff_are_privileged() {
        assert!(is_privileged(ROLE_ADMIN));
        assert!(is_privileged(ROLE_HR_STAFF));
    }

    #[test]
    fn other_roles_are_not_privileged() {
        assert!(!is_privileged(ROLE_EMPLOYEE));
        assert!(!is_privileged("Auditor"));
        // Role names are compared exactly.
        assert!(!is_privileged("admin"));
    }
}
