//! Success envelope for catalog API handlers.
//!
//! Every 2xx body is `{ "data": ... }`: the dispatch report for
//! `/functions`, the dry-run result for `/documents/validate`, and sync logs
//! for `/sync-logs`. Failures use the `{ error, code }` shape from
//! [`AppError`](crate::error::AppError) instead; a rejected write adds the
//! itemized violations.

use serde::Serialize;

/// `{ "data": T }` wrapper around a handler's payload.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
