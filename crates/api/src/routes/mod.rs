pub mod documents;
pub mod functions;
pub mod health;
pub mod sync_logs;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /functions                 list registered functions (GET)
/// /functions/events          dispatch an event to matching functions (POST)
/// /functions/{name}          run one named function (POST)
///
/// /documents/validate        dry-run validation of a raw document (POST)
///
/// /sync-logs                 per-source PIM sync logs (GET)
/// /sync-logs/{source}        one source's sync log (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/functions", functions::router())
        .nest("/documents", documents::router())
        .nest("/sync-logs", sync_logs::router())
}
