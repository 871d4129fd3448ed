//! Postgres implementation of the listing row store.
//!
//! Listing queries are composed at runtime, so rows are decoded generically
//! by column type rather than into a `FromRow` struct. The projections built
//! by the engine only ever produce `BIGINT`, `DOUBLE PRECISION` and `TEXT`;
//! the other types below are accepted for ad-hoc callers.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use hrms_core::listing::{BindValue, OwnerDirectory, Row, RowStore, StoreError};
use hrms_core::types::DbId;
use serde_json::Value;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Column, PgPool, Postgres, Row as _, TypeInfo};

use crate::repositories::UserRepo;

/// [`RowStore`] and [`OwnerDirectory`] backed by a sqlx pool.
///
/// Every call acquires its own connection and is bounded by `timeout`.
/// When the timeout fires the in-flight future is dropped, which releases
/// the connection back to the pool.
#[derive(Clone)]
pub struct PgRowStore {
    pool: PgPool,
    timeout: Duration,
}

impl PgRowStore {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    async fn bounded<T>(
        &self,
        fut: impl Future<Output = Result<T, sqlx::Error>>,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result.map_err(|e| StoreError::Backend(Box::new(e))),
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Row store query timed out"
                );
                Err(StoreError::Timeout(self.timeout))
            }
        }
    }
}

fn bind_all<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    binds: &'q [BindValue],
) -> Query<'q, Postgres, PgArguments> {
    for value in binds {
        query = match value {
            BindValue::BigInt(v) => query.bind(*v),
            BindValue::Text(s) => query.bind(s.as_str()),
        };
    }
    query
}

fn get<'r, T>(row: &'r PgRow, index: usize) -> Result<Value, StoreError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres> + Into<Value>,
{
    row.try_get::<Option<T>, _>(index)
        .map(|v| v.map_or(Value::Null, Into::into))
        .map_err(|e| StoreError::Backend(Box::new(e)))
}

/// Decode every column of `row`, preserving select-list order.
fn decode_row(row: &PgRow) -> Result<Row, StoreError> {
    let mut out = Row::with_capacity(row.columns().len());
    for (index, column) in row.columns().iter().enumerate() {
        let type_name = column.type_info().name();
        let value = match type_name {
            "INT2" => get::<i16>(row, index)?,
            "INT4" => get::<i32>(row, index)?,
            "INT8" => get::<i64>(row, index)?,
            "FLOAT4" => get::<f32>(row, index)?,
            "FLOAT8" => get::<f64>(row, index)?,
            "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => get::<String>(row, index)?,
            "BOOL" => get::<bool>(row, index)?,
            other => {
                return Err(StoreError::UnsupportedType {
                    column: column.name().to_string(),
                    type_name: other.to_string(),
                })
            }
        };
        out.insert(column.name().to_string(), value);
    }
    Ok(out)
}

#[async_trait]
impl RowStore for PgRowStore {
    async fn query(&self, sql: &str, binds: &[BindValue]) -> Result<Vec<Row>, StoreError> {
        let rows = self
            .bounded(bind_all(sqlx::query(sql), binds).fetch_all(&self.pool))
            .await?;
        rows.iter().map(decode_row).collect()
    }

    async fn query_scalar_count(
        &self,
        sql: &str,
        binds: &[BindValue],
    ) -> Result<i64, StoreError> {
        let row = self
            .bounded(bind_all(sqlx::query(sql), binds).fetch_one(&self.pool))
            .await?;
        row.try_get::<i64, _>(0)
            .map_err(|e| StoreError::Backend(Box::new(e)))
    }
}

#[async_trait]
impl OwnerDirectory for PgRowStore {
    async fn owner_id_for_user(&self, user_id: DbId) -> Result<Option<DbId>, StoreError> {
        self.bounded(UserRepo::employee_id_for_user(&self.pool, user_id))
            .await
    }
}
