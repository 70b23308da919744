//! Route definitions for the `/documents` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::documents;
use crate::state::AppState;

/// Routes mounted at `/documents`.
///
/// ```text
/// POST   /validate  -> validate_document  (dry-run)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/validate", post(documents::validate_document))
}
