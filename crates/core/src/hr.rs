//! HR record constants and input validation.
//!
//! Handlers call these before touching the database so bad input surfaces
//! as a 400 rather than a constraint violation.

use validator::ValidateEmail;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------------

pub const ATTENDANCE_PRESENT: &str = "Present";
pub const ATTENDANCE_ABSENT: &str = "Absent";
pub const ATTENDANCE_LATE: &str = "Late";
pub const ATTENDANCE_LEAVE: &str = "Leave";

pub const VALID_ATTENDANCE_STATUSES: &[&str] = &[
    ATTENDANCE_PRESENT,
    ATTENDANCE_ABSENT,
    ATTENDANCE_LATE,
    ATTENDANCE_LEAVE,
];

// ---------------------------------------------------------------------------
// Penalties
// ---------------------------------------------------------------------------

pub const PENALTY_LOW: &str = "Low";
pub const PENALTY_MEDIUM: &str = "Medium";
pub const PENALTY_HIGH: &str = "High";

pub const VALID_PENALTY_LEVELS: &[&str] = &[PENALTY_LOW, PENALTY_MEDIUM, PENALTY_HIGH];

// ---------------------------------------------------------------------------
// Bonus/penalty log
// ---------------------------------------------------------------------------

pub const BP_ENTRY_BONUS: &str = "bonus";
pub const BP_ENTRY_PENALTY: &str = "penalty";

/// Must match `ck_bp_log_entry_type`.
pub const VALID_BP_ENTRY_TYPES: &[&str] = &[BP_ENTRY_BONUS, BP_ENTRY_PENALTY];

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_USERNAME_LENGTH: usize = 64;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

fn one_of(kind: &str, value: &str, valid: &[&str]) -> Result<(), CoreError> {
    if valid.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown {kind}: '{value}'. Valid values: {}",
            valid.join(", ")
        )))
    }
}

pub fn validate_attendance_status(status: &str) -> Result<(), CoreError> {
    one_of("attendance status", status, VALID_ATTENDANCE_STATUSES)
}

pub fn validate_penalty_level(level: &str) -> Result<(), CoreError> {
    one_of("penalty level", level, VALID_PENALTY_LEVELS)
}

pub fn validate_bp_entry_type(entry_type: &str) -> Result<(), CoreError> {
    one_of("entry type", entry_type, VALID_BP_ENTRY_TYPES)
}

/// Months are 1-based.
pub fn validate_month(month: i32) -> Result<(), CoreError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "month must be between 1 and 12, got {month}"
        )))
    }
}

pub fn validate_year(year: i32) -> Result<(), CoreError> {
    if (1900..=2999).contains(&year) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "year must be between 1900 and 2999, got {year}"
        )))
    }
}

/// Money amounts and point totals may not be negative.
pub fn validate_non_negative(field: &str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be a non-negative number"
        )))
    }
}

/// Reject empty or whitespace-only required text.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

pub fn validate_username(username: &str) -> Result<(), CoreError> {
    validate_required("username", username)?;
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "username must be at most {MAX_USERNAME_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid email address: '{email}'")))
    }
}

pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        Err(CoreError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn known_values_pass() {
        assert!(validate_attendance_status("Late").is_ok());
        assert!(validate_penalty_level("High").is_ok());
        assert!(validate_bp_entry_type("bonus").is_ok());
    }

    #[test]
    fn unknown_values_list_the_valid_ones() {
        let err = validate_bp_entry_type("Bonus").unwrap_err();
        assert_matches!(&err, CoreError::Validation(msg) if msg.contains("bonus, penalty"));
        assert!(validate_attendance_status("late").is_err());
    }

    #[test]
    fn month_bounds() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }

    #[test]
    fn year_bounds() {
        assert!(validate_year(2026).is_ok());
        assert!(validate_year(26).is_err());
    }

    #[test]
    fn non_negative_amounts() {
        assert!(validate_non_negative("salary", 0.0).is_ok());
        assert!(validate_non_negative("salary", -1.0).is_err());
        assert!(validate_non_negative("salary", f64::NAN).is_err());
    }

    #[test]
    fn account_fields() {
        assert!(validate_username("j.smith").is_ok());
        assert!(validate_username("  ").is_err());
        assert!(validate_username(&"x".repeat(MAX_USERNAME_LENGTH + 1)).is_err());

        assert!(validate_email("j.smith@hrapp.com").is_ok());
        assert!(validate_email("not-an-email").is_err());

        assert!(validate_password("password123").is_ok());
        assert!(validate_password("short").is_err());
    }
}
