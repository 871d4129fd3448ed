//! Row store seam used by the listing engine.
//!
//! The engine never talks to a database driver directly. It hands a SQL
//! template plus a typed list of bound values to a [`RowStore`], which owns
//! connection handling, timeouts and row decoding.

use std::time::Duration;

use async_trait::async_trait;
use indexmap::IndexMap;

/// One materialized row, keyed by output column name in select-list order.
pub type Row = IndexMap<String, serde_json::Value>;

/// A value bound to a `$n` placeholder. User-controlled text only ever
/// reaches the database through one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    BigInt(i64),
    Text(String),
}

/// Failure reported by a [`RowStore`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("query timed out after {0:?}")]
    Timeout(Duration),

    #[error("column `{column}` has unsupported type `{type_name}`")]
    UnsupportedType { column: String, type_name: String },

    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

/// Executes parameterized read queries.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Run a query and return every row.
    async fn query(&self, sql: &str, binds: &[BindValue]) -> Result<Vec<Row>, StoreError>;

    /// Run a query whose single row holds a single BIGINT column.
    async fn query_scalar_count(&self, sql: &str, binds: &[BindValue])
        -> Result<i64, StoreError>;
}
