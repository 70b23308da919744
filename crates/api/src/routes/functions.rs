//! Route definitions for the `/functions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::functions;
use crate::state::AppState;

/// Routes mounted at `/functions`.
///
/// ```text
/// GET    /          -> list_functions
/// POST   /events    -> dispatch_event
/// POST   /{name}    -> invoke_function
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(functions::list_functions))
        .route("/events", post(functions::dispatch_event))
        .route("/{name}", post(functions::invoke_function))
}
