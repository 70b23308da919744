//! Handlers for the `/functions` resource.
//!
//! The host content platform posts every document mutation event here; a
//! rejection surfaces as 422 and the host aborts the write.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use catalog_core::document::DocumentEvent;
use catalog_events::DispatchReport;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/functions
///
/// Names of the registered document functions, in invocation order.
pub async fn list_functions(State(state): State<AppState>) -> Json<DataResponse<Vec<&'static str>>> {
    Json(DataResponse {
        data: state.dispatcher.function_names(),
    })
}

/// POST /api/v1/functions/events
///
/// Run every function whose filter matches the event. Events that match
/// nothing (deletes, unrelated types, envelopes without a document or with
/// wrong-shaped fields) succeed with an empty `invoked` list. A body that is
/// not a JSON object is a 400.
pub async fn dispatch_event(
    State(state): State<AppState>,
    payload: Result<Json<DocumentEvent>, JsonRejection>,
) -> AppResult<Json<DataResponse<DispatchReport>>> {
    let Json(event) = payload?;
    let report = state.dispatcher.dispatch(&event)?;
    Ok(Json(DataResponse { data: report }))
}

/// POST /api/v1/functions/{name}
///
/// Run a single named function. Returns 404 for an unknown name.
pub async fn invoke_function(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<DocumentEvent>, JsonRejection>,
) -> AppResult<Json<DataResponse<DispatchReport>>> {
    let Json(event) = payload?;
    let report = state
        .dispatcher
        .dispatch_to(&name, &event)
        .ok_or_else(|| AppError::NotFound(format!("Unknown function '{name}'")))??;
    Ok(Json(DataResponse { data: report }))
}
