use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hrms_core::error::CoreError;
use hrms_core::listing::ListingError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`ListingError`] for domain errors and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce consistent
/// `{"error", "code"}` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `hrms_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A listing request that could not be served.
    #[error(transparent)]
    Listing(#[from] ListingError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Listing errors ---
            AppError::Listing(listing) => match listing {
                ListingError::InvalidRequest(msg) => {
                    (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
                }
                ListingError::UnknownEntity(entity) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("Unknown listing '{entity}'"),
                ),
                // Details were logged where the store failed.
                ListingError::Unavailable(_) => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "LISTING_UNAVAILABLE",
                    "The listing is temporarily unavailable".to_string(),
                ),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Foreign key violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                Some("23505") if constraint.starts_with("uq_") => {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
                Some("23503") => {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Referenced record is missing or still in use: {constraint}"),
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use hrms_core::listing::StoreError;

    use super::*;

    fn status_and_code(err: AppError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let body = tokio::runtime::Runtime::new().unwrap().block_on(async {
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            serde_json::from_slice::<serde_json::Value>(&bytes).unwrap()
        });
        (status, body["code"].as_str().unwrap().to_string())
    }

    #[test]
    fn listing_errors_map_to_statuses() {
        assert_eq!(
            status_and_code(ListingError::InvalidRequest("page_start".into()).into()),
            (StatusCode::BAD_REQUEST, "INVALID_REQUEST".into())
        );
        assert_eq!(
            status_and_code(ListingError::UnknownEntity("payroll".into()).into()),
            (StatusCode::NOT_FOUND, "NOT_FOUND".into())
        );
        assert_eq!(
            status_and_code(
                ListingError::Unavailable(StoreError::Timeout(Duration::from_secs(10))).into()
            ),
            (StatusCode::SERVICE_UNAVAILABLE, "LISTING_UNAVAILABLE".into())
        );
    }

    #[test]
    fn core_errors_map_to_statuses() {
        assert_eq!(
            status_and_code(CoreError::Validation("month".into()).into()),
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR".into())
        );
        assert_eq!(
            status_and_code(CoreError::not_found("Employee", 3).into()),
            (StatusCode::NOT_FOUND, "NOT_FOUND".into())
        );
        assert_eq!(
            status_and_code(CoreError::Forbidden("no".into()).into()),
            (StatusCode::FORBIDDEN, "FORBIDDEN".into())
        );
    }

    #[test]
    fn unavailable_body_hides_store_detail() {
        let err: AppError = ListingError::Unavailable(StoreError::Backend(
            "password authentication failed for user hr".into(),
        ))
        .into();
        let response = err.into_response();
        let body = tokio::runtime::Runtime::new().unwrap().block_on(async {
            axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap()
        });
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("password"));
    }
}
