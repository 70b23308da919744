//! Handlers for the `/sync-logs` resource.

use axum::extract::{Path, State};
use axum::Json;
use catalog_events::SyncLog;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/sync-logs
pub async fn list_sync_logs(State(state): State<AppState>) -> Json<DataResponse<Vec<SyncLog>>> {
    Json(DataResponse {
        data: state.sync_logs.list().await,
    })
}

/// GET /api/v1/sync-logs/{source}
pub async fn get_sync_log(
    State(state): State<AppState>,
    Path(source): Path<String>,
) -> AppResult<Json<DataResponse<SyncLog>>> {
    let log = state
        .sync_logs
        .get(&source)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No sync log for source '{source}'")))?;
    Ok(Json(DataResponse { data: log }))
}
