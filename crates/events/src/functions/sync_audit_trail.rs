use std::sync::Arc;

use catalog_core::audit::{AuditRecord, AuditSink};
use catalog_core::document::{document_types, DocumentEvent};
use catalog_core::error::CoreError;

use super::{DocumentFunction, EventFilter};

/// Records every PIM-synced write. Never rejects.
pub struct SyncAuditTrail {
    sink: Arc<dyn AuditSink>,
}

impl SyncAuditTrail {
    pub const NAME: &'static str = "sync-audit-trail";

    pub fn new(sink: Arc<dyn AuditSink>) -> Self {
        Self { sink }
    }
}

impl DocumentFunction for SyncAuditTrail {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn filter(&self) -> EventFilter {
        EventFilter {
            document_types: &[
                document_types::PRODUCT,
                document_types::PRODUCT_PRICING,
                document_types::STORE_LOCATION,
            ],
        }
    }

    fn handle(&self, event: &DocumentEvent) -> Result<(), CoreError> {
        if !self.filter().matches(event) {
            return Ok(());
        }
        if let Some(record) = AuditRecord::for_event(event) {
            self.sink.emit(&record);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::audit::MemorySink;
    use catalog_core::document::EventKind;
    use serde_json::json;

    #[test]
    fn store_location_write_is_audited() {
        let sink = Arc::new(MemorySink::new());
        let function = SyncAuditTrail::new(sink.clone());
        let event = DocumentEvent::new(
            EventKind::Create,
            json!({
                "_id": "store-jfk",
                "_type": "storeLocation",
                "pimMetadata": {"syncSource": "akeneo", "syncStatus": "synced"}
            }),
        );

        assert!(function.handle(&event).is_ok());

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].document_type, "storeLocation");
        assert_eq!(records[0].sync_source, "akeneo");
        assert!(records[0].outcome.is_none());
    }

    #[test]
    fn invalid_product_is_audited_without_failing() {
        let sink = Arc::new(MemorySink::new());
        let function = SyncAuditTrail::new(sink.clone());
        let event = DocumentEvent::new(EventKind::Update, json!({"_type": "product"}));

        assert!(function.handle(&event).is_ok());
        assert_eq!(sink.records().len(), 1);
    }

    #[test]
    fn unrelated_types_and_deletes_are_skipped() {
        let sink = Arc::new(MemorySink::new());
        let function = SyncAuditTrail::new(sink.clone());

        function
            .handle(&DocumentEvent::new(EventKind::Create, json!({"_type": "promotion"})))
            .unwrap();
        function
            .handle(&DocumentEvent::new(EventKind::Delete, json!({"_type": "product"})))
            .unwrap();

        assert!(sink.records().is_empty());
    }
}
