//! Route definitions for the `/sync-logs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sync_logs;
use crate::state::AppState;

/// Routes mounted at `/sync-logs`.
///
/// ```text
/// GET    /          -> list_sync_logs
/// GET    /{source}  -> get_sync_log
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sync_logs::list_sync_logs))
        .route("/{source}", get(sync_logs::get_sync_log))
}
