//! Execution of composed listing queries.

use serde::Serialize;

use super::query::{compose, compose_total};
use super::request::ListingRequest;
use super::scope::ScopePredicate;
use super::spec::ListingSpec;
use super::store::{Row, RowStore, StoreError};
use super::ListingError;

/// One page of a listing plus its counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingResult {
    /// Rows visible under the scope, ignoring search.
    pub records_total: i64,
    /// Rows visible under the scope that also match the search.
    pub records_filtered: i64,
    pub rows: Vec<Row>,
}

/// Runs listings against a [`RowStore`].
pub struct ListingEngine;

impl ListingEngine {
    /// Run the total, filtered and page reads for one request.
    ///
    /// The reads are issued concurrently and do not share a transaction, so
    /// under concurrent writes the counts may describe a slightly different
    /// table state than the page. Any store failure aborts the whole call;
    /// nothing is retried here.
    pub async fn list(
        store: &dyn RowStore,
        spec: &ListingSpec,
        scope: &ScopePredicate,
        request: &ListingRequest,
    ) -> Result<ListingResult, ListingError> {
        let queries = compose(spec, scope, request);

        let (records_total, records_filtered, rows) = tokio::try_join!(
            store.query_scalar_count(&queries.total.sql, &queries.total.binds),
            store.query_scalar_count(&queries.filtered.sql, &queries.filtered.binds),
            store.query(&queries.page.sql, &queries.page.binds),
        )
        .map_err(|e| unavailable(spec, e))?;

        tracing::debug!(
            entity = spec.entity,
            sort_column = spec.columns[queries.sort.column].name,
            sort_direction = queries.sort.direction.as_sql(),
            page_start = request.page_start(),
            page_length = request.page_length(),
            records_total,
            records_filtered,
            rows = rows.len(),
            "Listing served"
        );

        Ok(ListingResult {
            records_total,
            records_filtered,
            rows,
        })
    }

    /// Only the scoped total, without search or paging.
    pub async fn count_total(
        store: &dyn RowStore,
        spec: &ListingSpec,
        scope: &ScopePredicate,
    ) -> Result<i64, ListingError> {
        let query = compose_total(spec, scope);
        store
            .query_scalar_count(&query.sql, &query.binds)
            .await
            .map_err(|e| unavailable(spec, e))
    }
}

fn unavailable(spec: &ListingSpec, error: StoreError) -> ListingError {
    tracing::error!(entity = spec.entity, error = %error, "Listing query failed");
    ListingError::Unavailable(error)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::listing::registry::ListingRegistry;
    use crate::listing::request::ListingParams;
    use crate::listing::store::BindValue;

    /// Store returning canned answers and recording every statement.
    #[derive(Default)]
    struct RecordingStore {
        total: i64,
        filtered: i64,
        rows: Vec<Row>,
        fail: bool,
        calls: Mutex<Vec<(String, Vec<BindValue>)>>,
    }

    impl RecordingStore {
        fn calls(&self) -> Vec<(String, Vec<BindValue>)> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, sql: &str, binds: &[BindValue]) -> Result<(), StoreError> {
            self.calls
                .lock()
                .unwrap()
                .push((sql.to_string(), binds.to_vec()));
            if self.fail {
                Err(StoreError::Timeout(Duration::from_secs(10)))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl RowStore for RecordingStore {
        async fn query(&self, sql: &str, binds: &[BindValue]) -> Result<Vec<Row>, StoreError> {
            self.record(sql, binds)?;
            Ok(self.rows.clone())
        }

        async fn query_scalar_count(
            &self,
            sql: &str,
            binds: &[BindValue],
        ) -> Result<i64, StoreError> {
            self.record(sql, binds)?;
            // The filtered count is the only count with a search clause.
            if sql.contains(" AND (") {
                Ok(self.filtered)
            } else {
                Ok(self.total)
            }
        }
    }

    fn row(id: i64, status: &str) -> Row {
        let mut row = Row::new();
        row.insert("id".into(), json!(id));
        row.insert("status".into(), json!(status));
        row
    }

    fn request(params: ListingParams) -> ListingRequest {
        ListingRequest::try_from(params).unwrap()
    }

    #[tokio::test]
    async fn list_runs_three_reads_and_assembles_result() {
        let registry = ListingRegistry::hr().unwrap();
        let spec = registry.get("attendance").unwrap();
        let store = RecordingStore {
            total: 50,
            filtered: 3,
            rows: vec![row(3, "Late"), row(2, "Late"), row(1, "Late")],
            ..Default::default()
        };

        let result = ListingEngine::list(
            &store,
            spec,
            &ScopePredicate::Unrestricted,
            &request(ListingParams {
                search_term: Some("late".into()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        assert_eq!(result.records_total, 50);
        assert_eq!(result.records_filtered, 3);
        assert_eq!(result.rows.len(), 3);
        assert_eq!(store.calls().len(), 3);
    }

    #[tokio::test]
    async fn result_serializes_flat_with_ordered_rows() {
        let result = ListingResult {
            records_total: 2,
            records_filtered: 1,
            rows: vec![row(9, "Present")],
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"records_total":2,"records_filtered":1,"rows":[{"id":9,"status":"Present"}]}"#
        );
    }

    #[tokio::test]
    async fn store_failure_is_unavailable() {
        let registry = ListingRegistry::hr().unwrap();
        let spec = registry.get("penalties").unwrap();
        let store = RecordingStore {
            fail: true,
            ..Default::default()
        };

        let err = ListingEngine::list(
            &store,
            spec,
            &ScopePredicate::Unrestricted,
            &request(ListingParams::default()),
        )
        .await
        .unwrap_err();
        assert_matches!(err, ListingError::Unavailable(StoreError::Timeout(_)));
    }

    #[tokio::test]
    async fn count_total_issues_a_single_scoped_count() {
        let registry = ListingRegistry::hr().unwrap();
        let spec = registry.get("bonus_points").unwrap();
        let store = RecordingStore {
            total: 4,
            ..Default::default()
        };
        let scope = ScopePredicate::for_actor(spec, "Employee", Some(11));

        let total = ListingEngine::count_total(&store, spec, &scope).await.unwrap();
        assert_eq!(total, 4);

        let calls = store.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.ends_with("WHERE (bp.employee_id = $1)"));
        assert_eq!(calls[0].1, vec![BindValue::BigInt(11)]);
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_the_store() {
        let store = RecordingStore::default();
        let err = ListingRequest::try_from(ListingParams {
            page_start: Some(-1),
            page_length: Some(10),
            ..Default::default()
        })
        .unwrap_err();
        assert_matches!(err, ListingError::InvalidRequest(_));
        assert!(store.calls().is_empty());
    }
}
