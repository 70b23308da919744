//! Handlers for the `/documents` resource.
//!
//! A dry-run gate for PIM writers: the same rules the write validator
//! enforces, evaluated without dispatching functions or emitting audit
//! records.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use catalog_core::document::{DocumentEvent, EventKind};
use catalog_core::validation::validate_event;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DryRunResult {
    pub document_type: String,
    /// `false` when the type has no rule set and was passed through.
    pub evaluated: bool,
    pub warnings: Vec<String>,
}

/// POST /api/v1/documents/validate
///
/// Validate a raw document as if it were being created. 400 when the body
/// has no `_type`, 422 on blocking violations.
pub async fn validate_document(
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<DataResponse<DryRunResult>>> {
    let Json(document) = payload?;
    let document_type = document
        .get("_type")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing _type field".to_string()))?
        .to_string();

    let event = DocumentEvent::new(EventKind::Create, document);
    let (evaluated, warnings) = match validate_event(&event) {
        Some(evaluation) => (true, evaluation.into_result()?),
        None => (false, Vec::new()),
    };

    tracing::debug!(%document_type, evaluated, warnings = warnings.len(), "Dry-run validation passed");

    Ok(Json(DataResponse {
        data: DryRunResult {
            document_type,
            evaluated,
            warnings: warnings.iter().map(ToString::to_string).collect(),
        },
    }))
}
