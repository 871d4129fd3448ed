//! Aggregate counts for the administrator and HR dashboards.
//!
//! Employee dashboards are scoped per actor and go through the listing
//! engine instead.

use sqlx::PgPool;

use crate::models::dashboard::{AdminStats, HrStats};

pub struct DashboardRepo;

impl DashboardRepo {
    pub async fn admin_stats(pool: &PgPool) -> Result<AdminStats, sqlx::Error> {
        let (users, roles, employees, departments): (i64, i64, i64, i64) = sqlx::query_as(
            "SELECT
                (SELECT COUNT(*) FROM users),
                (SELECT COUNT(*) FROM roles),
                (SELECT COUNT(*) FROM employees),
                (SELECT COUNT(*) FROM departments)",
        )
        .fetch_one(pool)
        .await?;
        Ok(AdminStats {
            users,
            roles,
            employees,
            departments,
        })
    }

    pub async fn hr_stats(pool: &PgPool) -> Result<HrStats, sqlx::Error> {
        let (employees, departments, positions, penalties): (i64, i64, i64, i64) =
            sqlx::query_as(
                "SELECT
                    (SELECT COUNT(*) FROM employees),
                    (SELECT COUNT(*) FROM departments),
                    (SELECT COUNT(*) FROM positions),
                    (SELECT COUNT(*) FROM penalties)",
            )
            .fetch_one(pool)
            .await?;
        Ok(HrStats {
            employees,
            departments,
            positions,
            penalties,
        })
    }
}
