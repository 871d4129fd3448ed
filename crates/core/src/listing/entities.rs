//! Listing specs for the HR schema.
//!
//! Column names and aliases here must match the tables created in
//! `db/migrations`. Every owner table joins `employees e` so listings can show
//! the owner's full name and search on it.

use super::registry::ListingRegistry;
use super::request::SortDirection;
use super::spec::{
    col, full_name, BaseClause, DisplayColumn, Join, ListingSpec, SearchMode, SortSpec, ValueKind,
};
use super::RegistryError;
use crate::roles::{PRIVILEGED_ROLES, ROLE_ADMIN};

const ADMIN_ONLY: &[&str] = &[ROLE_ADMIN];

fn sort(column: usize, direction: SortDirection) -> SortSpec {
    SortSpec { column, direction }
}

/// `FROM <table> <alias> JOIN employees e ON <alias>.employee_id = e.id`.
fn owned_by_employee(table: &'static str, alias: &'static str) -> BaseClause {
    BaseClause::new(table, alias).join(Join::inner(
        "employees",
        "e",
        col(alias, "employee_id"),
        col("e", "id"),
    ))
}

fn employee_name() -> DisplayColumn {
    DisplayColumn::new("employee_name", full_name("e"), ValueKind::Text).searchable(SearchMode::Text)
}

pub fn attendance() -> ListingSpec {
    ListingSpec {
        entity: "attendance",
        base: owned_by_employee("attendance", "a"),
        primary_key: col("a", "id"),
        owner_column: Some(col("a", "employee_id")),
        columns: vec![
            DisplayColumn::new("id", col("a", "id"), ValueKind::Integer),
            DisplayColumn::new("date", col("a", "attendance_date"), ValueKind::Date)
                .searchable(SearchMode::Date),
            DisplayColumn::new("status", col("a", "status"), ValueKind::Text)
                .searchable(SearchMode::Text),
            employee_name(),
            DisplayColumn::new("employee_id", col("a", "employee_id"), ValueKind::Integer),
        ],
        default_sort: sort(1, SortDirection::Desc),
        allowed_roles: None,
    }
}

pub fn bonus_points() -> ListingSpec {
    ListingSpec {
        entity: "bonus_points",
        base: owned_by_employee("bonus_points", "bp"),
        primary_key: col("bp", "id"),
        owner_column: Some(col("bp", "employee_id")),
        columns: vec![
            DisplayColumn::new("id", col("bp", "id"), ValueKind::Integer),
            DisplayColumn::new("month", col("bp", "month"), ValueKind::Integer)
                .searchable(SearchMode::Numeric),
            DisplayColumn::new("year", col("bp", "year"), ValueKind::Integer)
                .searchable(SearchMode::Numeric)
                .then_by(col("bp", "month")),
            DisplayColumn::new("points", col("bp", "points"), ValueKind::Integer)
                .searchable(SearchMode::Numeric),
            employee_name(),
            DisplayColumn::new("employee_id", col("bp", "employee_id"), ValueKind::Integer),
        ],
        default_sort: sort(2, SortDirection::Desc),
        allowed_roles: None,
    }
}

pub fn penalties() -> ListingSpec {
    ListingSpec {
        entity: "penalties",
        base: owned_by_employee("penalties", "p"),
        primary_key: col("p", "id"),
        owner_column: Some(col("p", "employee_id")),
        columns: vec![
            DisplayColumn::new("id", col("p", "id"), ValueKind::Integer),
            DisplayColumn::new("penalty_date", col("p", "penalty_date"), ValueKind::Date)
                .searchable(SearchMode::Date),
            DisplayColumn::new("penalty_level", col("p", "penalty_level"), ValueKind::Text)
                .searchable(SearchMode::Text),
            DisplayColumn::new("description", col("p", "description"), ValueKind::Text)
                .searchable(SearchMode::Text)
                .unsortable(),
            employee_name(),
            DisplayColumn::new("employee_id", col("p", "employee_id"), ValueKind::Integer),
        ],
        default_sort: sort(1, SortDirection::Desc),
        allowed_roles: None,
    }
}

pub fn bp_log() -> ListingSpec {
    ListingSpec {
        entity: "bp_log",
        base: owned_by_employee("bp_log", "b"),
        primary_key: col("b", "id"),
        owner_column: Some(col("b", "employee_id")),
        columns: vec![
            DisplayColumn::new("id", col("b", "id"), ValueKind::Integer),
            DisplayColumn::new("entry_type", col("b", "entry_type"), ValueKind::Text)
                .searchable(SearchMode::Text),
            DisplayColumn::new("reference_id", col("b", "reference_id"), ValueKind::Integer),
            DisplayColumn::new("entry_date", col("b", "entry_date"), ValueKind::Date)
                .searchable(SearchMode::Date),
            employee_name(),
            DisplayColumn::new("employee_id", col("b", "employee_id"), ValueKind::Integer),
        ],
        default_sort: sort(3, SortDirection::Desc),
        allowed_roles: None,
    }
}

pub fn yearly_bonus() -> ListingSpec {
    ListingSpec {
        entity: "yearly_bonus",
        base: owned_by_employee("yearly_bonus", "yb"),
        primary_key: col("yb", "id"),
        owner_column: Some(col("yb", "employee_id")),
        columns: vec![
            DisplayColumn::new("id", col("yb", "id"), ValueKind::Integer),
            DisplayColumn::new("year", col("yb", "year"), ValueKind::Integer)
                .searchable(SearchMode::Numeric),
            DisplayColumn::new(
                "total_bonus_point",
                col("yb", "total_bonus_point"),
                ValueKind::Integer,
            ),
            DisplayColumn::new(
                "yearly_bonus_score",
                col("yb", "yearly_bonus_score"),
                ValueKind::Decimal,
            )
            .searchable(SearchMode::Numeric),
            employee_name(),
            DisplayColumn::new("employee_id", col("yb", "employee_id"), ValueKind::Integer),
        ],
        default_sort: sort(1, SortDirection::Desc),
        allowed_roles: None,
    }
}

/// Employees are their own owners: an unprivileged actor sees only the row
/// whose `id` is their linked employee.
pub fn employees() -> ListingSpec {
    ListingSpec {
        entity: "employees",
        base: BaseClause::new("employees", "e")
            .join(Join::inner(
                "departments",
                "d",
                col("e", "department_id"),
                col("d", "id"),
            ))
            .join(Join::inner(
                "positions",
                "p",
                col("e", "position_id"),
                col("p", "id"),
            )),
        primary_key: col("e", "id"),
        owner_column: Some(col("e", "id")),
        columns: vec![
            DisplayColumn::new("id", col("e", "id"), ValueKind::Integer),
            DisplayColumn::new("first_name", col("e", "first_name"), ValueKind::Text)
                .searchable(SearchMode::Text),
            DisplayColumn::new("last_name", col("e", "last_name"), ValueKind::Text)
                .searchable(SearchMode::Text),
            DisplayColumn::new("salary", col("e", "salary"), ValueKind::Decimal),
            DisplayColumn::new("start_date", col("e", "start_date"), ValueKind::Date)
                .searchable(SearchMode::Date),
            DisplayColumn::new("department_name", col("d", "name"), ValueKind::Text)
                .searchable(SearchMode::Text),
            DisplayColumn::new("position_name", col("p", "name"), ValueKind::Text)
                .searchable(SearchMode::Text),
        ],
        default_sort: sort(0, SortDirection::Asc),
        allowed_roles: None,
    }
}

pub fn departments() -> ListingSpec {
    ListingSpec {
        entity: "departments",
        base: BaseClause::new("departments", "d"),
        primary_key: col("d", "id"),
        owner_column: None,
        columns: vec![
            DisplayColumn::new("id", col("d", "id"), ValueKind::Integer),
            DisplayColumn::new("name", col("d", "name"), ValueKind::Text)
                .searchable(SearchMode::Text),
            DisplayColumn::new("description", col("d", "description"), ValueKind::Text)
                .searchable(SearchMode::Text),
        ],
        default_sort: sort(0, SortDirection::Asc),
        allowed_roles: Some(PRIVILEGED_ROLES),
    }
}

pub fn positions() -> ListingSpec {
    ListingSpec {
        entity: "positions",
        base: BaseClause::new("positions", "p"),
        primary_key: col("p", "id"),
        owner_column: None,
        columns: vec![
            DisplayColumn::new("id", col("p", "id"), ValueKind::Integer),
            DisplayColumn::new("name", col("p", "name"), ValueKind::Text)
                .searchable(SearchMode::Text),
            DisplayColumn::new("base_salary", col("p", "base_salary"), ValueKind::Decimal)
                .searchable(SearchMode::Numeric),
        ],
        default_sort: sort(0, SortDirection::Asc),
        allowed_roles: Some(PRIVILEGED_ROLES),
    }
}

pub fn users() -> ListingSpec {
    ListingSpec {
        entity: "users",
        base: BaseClause::new("users", "u")
            .join(Join::inner("roles", "r", col("u", "role_id"), col("r", "id")))
            .join(Join::left(
                "employees",
                "e",
                col("u", "employee_id"),
                col("e", "id"),
            )),
        primary_key: col("u", "id"),
        owner_column: None,
        columns: vec![
            DisplayColumn::new("id", col("u", "id"), ValueKind::Integer),
            DisplayColumn::new("username", col("u", "username"), ValueKind::Text)
                .searchable(SearchMode::Text),
            DisplayColumn::new("email", col("u", "email"), ValueKind::Text)
                .searchable(SearchMode::Text),
            DisplayColumn::new("role_name", col("r", "name"), ValueKind::Text)
                .searchable(SearchMode::Text),
            employee_name(),
        ],
        default_sort: sort(0, SortDirection::Asc),
        allowed_roles: Some(ADMIN_ONLY),
    }
}

pub fn roles() -> ListingSpec {
    ListingSpec {
        entity: "roles",
        base: BaseClause::new("roles", "r"),
        primary_key: col("r", "id"),
        owner_column: None,
        columns: vec![
            DisplayColumn::new("id", col("r", "id"), ValueKind::Integer),
            DisplayColumn::new("name", col("r", "name"), ValueKind::Text)
                .searchable(SearchMode::Text),
            DisplayColumn::new("description", col("r", "description"), ValueKind::Text)
                .searchable(SearchMode::Text),
        ],
        default_sort: sort(0, SortDirection::Asc),
        allowed_roles: Some(ADMIN_ONLY),
    }
}

impl ListingRegistry {
    /// Registry holding every HR entity. Fails if any spec is malformed.
    pub fn hr() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for spec in [
            attendance(),
            bonus_points(),
            penalties(),
            bp_log(),
            yearly_bonus(),
            employees(),
            departments(),
            positions(),
            users(),
            roles(),
        ] {
            registry.register(spec)?;
        }
        Ok(registry)
    }
}
