//! Dashboard statistics payloads.

use serde::Serialize;

use super::department::DepartmentHeadcount;

/// Counts shown to administrators.
#[derive(Debug, Clone, Serialize)]
pub struct AdminStats {
    pub users: i64,
    pub roles: i64,
    pub employees: i64,
    pub departments: i64,
}

/// Counts shown to HR staff.
#[derive(Debug, Clone, Serialize)]
pub struct HrStats {
    pub employees: i64,
    pub departments: i64,
    pub positions: i64,
    pub penalties: i64,
}

/// An employee's own record counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmployeeStats {
    pub attendance: i64,
    pub bonus_points: i64,
    pub penalties: i64,
}

/// Role-dependent dashboard body, tagged by `view`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Dashboard {
    Admin {
        stats: AdminStats,
        departments: Vec<DepartmentHeadcount>,
    },
    Hr {
        stats: HrStats,
        departments: Vec<DepartmentHeadcount>,
    },
    Employee {
        stats: EmployeeStats,
    },
}
