//! Document event handling for the catalog dataset.
//!
//! - [`functions`]: the named document functions (`validate-catalog-writes`,
//!   `sync-audit-trail`) and their event filters.
//! - [`Dispatcher`]: routes one mutation event to every matching function.
//! - [`AuditBus`]: in-process fan-out of audit records backed by
//!   `tokio::sync::broadcast`.
//! - [`TracingSink`] / [`FanoutSink`]: audit sinks for the log collector.
//! - [`SyncLogCollector`]: background aggregation of PIM sync outcomes.

pub mod bus;
pub mod dispatcher;
pub mod functions;
pub mod sinks;
pub mod sync_log;

pub use bus::AuditBus;
pub use dispatcher::{DispatchReport, Dispatcher};
pub use functions::{DocumentFunction, EventFilter, SyncAuditTrail, ValidateCatalogWrites};
pub use sinks::{FanoutSink, TracingSink};
pub use sync_log::{SyncLog, SyncLogCollector, SyncLogStore};
