//! Schema rules the repositories and the listing engine depend on.

use sqlx::PgPool;

/// Tables whose rows are owned by an employee through `employee_id`.
const OWNED_TABLES: [&str; 5] = [
    "attendance",
    "bonus_points",
    "penalties",
    "bp_log",
    "yearly_bonus",
];

async fn public_tables(pool: &PgPool) -> Vec<String> {
    sqlx::query_scalar(
        "SELECT table_name::TEXT FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(pool)
    .await
    .unwrap()
}

async fn column_type(pool: &PgPool, table: &str, column: &str) -> Option<String> {
    sqlx::query_scalar(
        "SELECT data_type::TEXT FROM information_schema.columns
         WHERE table_schema = 'public' AND table_name = $1 AND column_name = $2",
    )
    .bind(table)
    .bind(column)
    .fetch_optional(pool)
    .await
    .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_every_table_has_bigint_id_and_timestamps(pool: PgPool) {
    let tables = public_tables(&pool).await;
    assert_eq!(tables.len(), 10, "unexpected tables: {tables:?}");

    for table in &tables {
        assert_eq!(
            column_type(&pool, table, "id").await.as_deref(),
            Some("bigint"),
            "{table}.id"
        );
        for column in ["created_at", "updated_at"] {
            assert_eq!(
                column_type(&pool, table, column).await.as_deref(),
                Some("timestamp with time zone"),
                "{table}.{column}"
            );
        }
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_every_table_keeps_updated_at_current(pool: PgPool) {
    let with_trigger: Vec<String> = sqlx::query_scalar(
        "SELECT event_object_table::TEXT FROM information_schema.triggers
         WHERE trigger_name = 'set_updated_at' AND event_manipulation = 'UPDATE'
         ORDER BY event_object_table",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(with_trigger, public_tables(&pool).await);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_text_columns_are_never_varchar(pool: PgPool) {
    let varchar: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name::TEXT, column_name::TEXT FROM information_schema.columns
         WHERE table_schema = 'public' AND data_type = 'character varying'
           AND table_name != '_sqlx_migrations'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(varchar.is_empty(), "use TEXT instead of VARCHAR: {varchar:?}");
}

/// Owner-scoped listings filter on `employee_id`, so it must be indexed.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_owned_tables_index_employee_id(pool: PgPool) {
    for table in OWNED_TABLES {
        assert_eq!(
            column_type(&pool, table, "employee_id").await.as_deref(),
            Some("bigint"),
            "{table}.employee_id"
        );

        let indexed: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1 FROM pg_indexes
                 WHERE schemaname = 'public' AND tablename = $1
                   AND indexdef LIKE '%(employee_id)%'
             )",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert!(indexed, "{table}.employee_id has no index");
    }
}

/// Conflict mapping in the API recognises unique constraints by their `uq_` prefix.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unique_constraints_use_uq_prefix(pool: PgPool) {
    let names: Vec<String> = sqlx::query_scalar(
        "SELECT constraint_name::TEXT FROM information_schema.table_constraints
         WHERE table_schema = 'public' AND constraint_type = 'UNIQUE'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!names.is_empty());
    for name in &names {
        assert!(name.starts_with("uq_"), "unique constraint {name} lacks uq_ prefix");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_builtin_roles_are_seeded(pool: PgPool) {
    hrms_db::health_check(&pool).await.unwrap();

    let names: Vec<String> = sqlx::query_scalar("SELECT name FROM roles ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(
        names,
        [
            hrms_core::roles::ROLE_ADMIN,
            hrms_core::roles::ROLE_HR_STAFF,
            hrms_core::roles::ROLE_EMPLOYEE,
        ]
    );
}
