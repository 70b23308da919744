use std::sync::Arc;

use catalog_core::audit::AuditSink;
use catalog_events::{AuditBus, Dispatcher, FanoutSink, SyncLogStore, TracingSink};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Catalog document functions (validation + audit trail).
    pub dispatcher: Arc<Dispatcher>,
    /// Fan-out of every audit record the functions emit.
    pub audit_bus: Arc<AuditBus>,
    /// Per-source sync logs, fed by the collector subscribed to `audit_bus`.
    pub sync_logs: SyncLogStore,
}

impl AppState {
    /// Wire the catalog functions to audit into both the process log and the
    /// audit bus.
    pub fn new(config: ServerConfig) -> Self {
        let audit_bus = Arc::new(AuditBus::new(config.audit_bus_capacity));
        let sink = FanoutSink::new()
            .with(Arc::new(TracingSink))
            .with(Arc::clone(&audit_bus) as Arc<dyn AuditSink>);

        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(Dispatcher::catalog(Arc::new(sink))),
            audit_bus,
            sync_logs: SyncLogStore::new(),
        }
    }
}
