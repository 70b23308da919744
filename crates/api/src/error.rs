use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_core::error::CoreError;
use catalog_core::validation::{Rejection, Violation};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<Rejection> for AppError {
    fn from(rejection: Rejection) -> Self {
        Self::Core(CoreError::Rejected(rejection))
    }
}

/// An unreadable body is a client error, never a validation rejection: 422 is
/// reserved for `VALIDATION_REJECTED`.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Core(CoreError::Rejected(rejection)) => {
                return rejection_response(&rejection);
            }
            AppError::Core(CoreError::Serialization(e)) => {
                tracing::error!(error = %e, "Serialization error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn lines(items: &[Violation]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// 422 carrying the rendered message plus the itemized lines.
fn rejection_response(rejection: &Rejection) -> Response {
    let body = json!({
        "error": rejection.render(),
        "code": "VALIDATION_REJECTED",
        "documentType": rejection.kind,
        "documentId": rejection.document_id,
        "violations": lines(&rejection.violations),
        "warnings": lines(&rejection.warnings),
    });

    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
}
