//! Audit sinks that write to the process log.

use std::sync::Arc;

use catalog_core::audit::{AuditRecord, AuditSink};

/// Writes each record as one JSON line through `tracing`, under the
/// `sync_audit` target so a log collector can route it separately.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AuditSink for TracingSink {
    fn emit(&self, record: &AuditRecord) {
        match record.to_json() {
            Ok(line) => tracing::info!(target: "sync_audit", record = %line, "Sync audit"),
            Err(e) => tracing::warn!(
                error = %e,
                document_type = %record.document_type,
                "Failed to serialize audit record"
            ),
        }
    }
}

/// Forwards each record to every inner sink, in order.
#[derive(Clone, Default)]
pub struct FanoutSink {
    sinks: Vec<Arc<dyn AuditSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl AuditSink for FanoutSink {
    fn emit(&self, record: &AuditRecord) {
        for sink in &self.sinks {
            sink.emit(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::audit::MemorySink;
    use catalog_core::document::{DocumentEvent, EventKind};
    use serde_json::json;

    #[test]
    fn fanout_reaches_every_sink() {
        let a = Arc::new(MemorySink::new());
        let b = Arc::new(MemorySink::new());
        let fanout = FanoutSink::new()
            .with(a.clone())
            .with(Arc::new(TracingSink))
            .with(b.clone());

        let event = DocumentEvent::new(EventKind::Create, json!({"_id": "s1", "_type": "storeLocation"}));
        fanout.emit(&AuditRecord::for_event(&event).unwrap());

        assert_eq!(a.records().len(), 1);
        assert_eq!(b.records().len(), 1);
    }
}
