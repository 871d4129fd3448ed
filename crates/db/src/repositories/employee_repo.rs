//! Repository for the `employees` table.

use hrms_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::{
    CreateEmployee, Employee, EmployeeOption, EmployeeProfile, UpdateEmployee,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, salary, start_date, department_id, \
                       position_id, created_at, updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees
                (first_name, last_name, salary, start_date, department_id, position_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.salary)
            .bind(input.start_date)
            .bind(input.department_id)
            .bind(input.position_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Employee joined with department and position names.
    pub async fn find_profile(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EmployeeProfile>, sqlx::Error> {
        sqlx::query_as::<_, EmployeeProfile>(
            "SELECT e.id, e.first_name, e.last_name, e.salary, e.start_date,
                    d.name AS department_name, p.name AS position_name
             FROM employees e
             JOIN departments d ON e.department_id = d.id
             JOIN positions p ON e.position_id = p.id
             WHERE e.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// All employees as `id` + full name, ordered by first name.
    pub async fn list_options(pool: &PgPool) -> Result<Vec<EmployeeOption>, sqlx::Error> {
        sqlx::query_as::<_, EmployeeOption>(
            "SELECT id, CONCAT_WS(' ', first_name, last_name) AS full_name
             FROM employees
             ORDER BY first_name ASC, last_name ASC, id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Update an employee. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                salary = COALESCE($4, salary),
                start_date = COALESCE($5, start_date),
                department_id = COALESCE($6, department_id),
                position_id = COALESCE($7, position_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.salary)
            .bind(input.start_date)
            .bind(input.department_id)
            .bind(input.position_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an employee. Owned attendance, bonus and penalty rows cascade;
    /// linked users are unlinked.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
