//! Per-source PIM sync log.
//!
//! [`SyncLogCollector`] subscribes to the [`AuditBus`](crate::bus::AuditBus)
//! and folds every validation outcome into a [`SyncLog`] keyed by the sync
//! source that produced the write. It runs as a long-lived background task and
//! stops when the bus is dropped.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

use catalog_core::audit::AuditRecord;
use catalog_core::types::Timestamp;
use serde::Serialize;
use tokio::sync::{broadcast, RwLock};

/// Most recent error lines kept per source.
pub const MAX_RECORDED_ERRORS: usize = 50;

/// Running totals for one sync source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncLog {
    pub sync_source: String,
    pub synced_at: Timestamp,
    pub records_processed: u64,
    pub records_succeeded: u64,
    pub records_failed: u64,
    pub errors: VecDeque<String>,
}

impl SyncLog {
    pub fn new(sync_source: impl Into<String>, synced_at: Timestamp) -> Self {
        Self {
            sync_source: sync_source.into(),
            synced_at,
            records_processed: 0,
            records_succeeded: 0,
            records_failed: 0,
            errors: VecDeque::new(),
        }
    }

    /// Fold one audit record in. Records without a validation outcome (plain
    /// audit-trail entries) are ignored.
    pub fn apply(&mut self, record: &AuditRecord) {
        let Some(outcome) = &record.outcome else {
            return;
        };

        self.synced_at = self.synced_at.max(record.timestamp);
        self.records_processed += 1;
        if outcome.passed {
            self.records_succeeded += 1;
            return;
        }

        self.records_failed += 1;
        let subject = record
            .sku
            .as_deref()
            .or(record.document_id.as_deref())
            .unwrap_or(&record.document_type);
        for violation in &outcome.violations {
            if self.errors.len() == MAX_RECORDED_ERRORS {
                self.errors.pop_front();
            }
            self.errors.push_back(format!("{subject}: {violation}"));
        }
    }
}

/// Shared, cheaply cloneable map of sync logs by source.
#[derive(Debug, Clone, Default)]
pub struct SyncLogStore {
    logs: Arc<RwLock<BTreeMap<String, SyncLog>>>,
}

impl SyncLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, record: &AuditRecord) {
        if record.outcome.is_none() {
            return;
        }
        let mut logs = self.logs.write().await;
        logs.entry(record.sync_source.clone())
            .or_insert_with(|| SyncLog::new(&record.sync_source, record.timestamp))
            .apply(record);
    }

    /// All logs, ordered by source name.
    pub async fn list(&self) -> Vec<SyncLog> {
        self.logs.read().await.values().cloned().collect()
    }

    pub async fn get(&self, sync_source: &str) -> Option<SyncLog> {
        self.logs.read().await.get(sync_source).cloned()
    }
}

/// Background service feeding the [`SyncLogStore`] from the audit bus.
pub struct SyncLogCollector;

impl SyncLogCollector {
    /// Run the collection loop until the bus closes.
    pub async fn run(store: SyncLogStore, mut receiver: broadcast::Receiver<AuditRecord>) {
        loop {
            match receiver.recv().await {
                Ok(record) => store.record(&record).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(
                        skipped = n,
                        "Sync log collector lagged, some records were not counted"
                    );
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Audit bus closed, sync log collector shutting down");
                    break;
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
