//! Audit records for catalog writes and the sink they are emitted to.
//!
//! Emission is fire-and-forget: [`AuditSink::emit`] cannot fail, and a sink
//! that hits a problem internally must swallow it. Audit output never
//! affects an accept/reject decision.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::document::{DocumentEvent, SyncableDocument};
use crate::error::CoreError;
use crate::types::{DocumentId, Timestamp};
use crate::validation::ValidationOutcome;

/// Placeholder for a missing sync source or status.
pub const UNKNOWN: &str = "unknown";

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Validation result attached to records emitted by the write validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditOutcome {
    pub passed: bool,
    /// Rendered blocking violations (empty when passed).
    pub violations: Vec<String>,
    pub warnings: usize,
}

impl From<&ValidationOutcome> for AuditOutcome {
    fn from(outcome: &ValidationOutcome) -> Self {
        Self {
            passed: outcome.is_accepted(),
            violations: outcome.violations().iter().map(ToString::to_string).collect(),
            warnings: outcome.warnings().len(),
        }
    }
}

/// One audit line for a document write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub timestamp: Timestamp,
    pub operation: String,
    pub document_type: String,
    pub document_id: Option<DocumentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub sync_source: String,
    pub sync_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<AuditOutcome>,
}

impl AuditRecord {
    /// Build a record from an event's snapshot.
    ///
    /// Returns `None` when the event carries no snapshot or no document type.
    pub fn for_event(event: &DocumentEvent) -> Option<Self> {
        let document_type = event.document_type()?.to_string();
        let doc = SyncableDocument::from_snapshot(event.snapshot()?);

        Some(Self {
            timestamp: chrono::Utc::now(),
            operation: event.kind.as_operation().to_string(),
            document_type,
            sync_source: doc.sync_source().unwrap_or(UNKNOWN).to_string(),
            sync_status: doc.sync_status().unwrap_or(UNKNOWN).to_string(),
            document_id: doc.id,
            sku: doc.sku,
            outcome: None,
        })
    }

    pub fn with_outcome(mut self, outcome: &ValidationOutcome) -> Self {
        self.outcome = Some(AuditOutcome::from(outcome));
        self
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}

// ---------------------------------------------------------------------------
// Sinks
// ---------------------------------------------------------------------------

/// Destination for audit records.
pub trait AuditSink: Send + Sync {
    fn emit(&self, record: &AuditRecord);
}

impl<S: AuditSink + ?Sized> AuditSink for Arc<S> {
    fn emit(&self, record: &AuditRecord) {
        (**self).emit(record);
    }
}

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl AuditSink for NoopSink {
    fn emit(&self, _record: &AuditRecord) {}
}

/// Keeps every record in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AuditSink for MemorySink {
    fn emit(&self, record: &AuditRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::EventKind;
    use crate::validation::Violation;
    use serde_json::json;

    fn product_event() -> DocumentEvent {
        DocumentEvent::new(
            EventKind::Create,
            json!({
                "_id": "product-bh1001",
                "_type": "product",
                "sku": "BH1001",
                "pimMetadata": {"syncSource": "akeneo", "syncStatus": "synced"}
            }),
        )
    }

    #[test]
    fn record_captures_identifying_fields() {
        let record = AuditRecord::for_event(&product_event()).unwrap();
        assert_eq!(record.operation, "document.create");
        assert_eq!(record.document_type, "product");
        assert_eq!(record.document_id.as_deref(), Some("product-bh1001"));
        assert_eq!(record.sku.as_deref(), Some("BH1001"));
        assert_eq!(record.sync_source, "akeneo");
        assert_eq!(record.sync_status, "synced");
        assert!(record.outcome.is_none());
    }

    #[test]
    fn missing_pim_metadata_defaults_to_unknown() {
        let event = DocumentEvent::new(
            EventKind::Update,
            json!({"_id": "store-1", "_type": "storeLocation"}),
        );
        let record = AuditRecord::for_event(&event).unwrap();
        assert_eq!(record.sync_source, UNKNOWN);
        assert_eq!(record.sync_status, UNKNOWN);
        assert_eq!(record.operation, "document.update");
    }

    #[test]
    fn event_without_snapshot_has_no_record() {
        assert!(AuditRecord::for_event(&DocumentEvent::default()).is_none());
    }

    #[test]
    fn outcome_summarizes_validation() {
        let outcome = ValidationOutcome::Rejected {
            violations: vec![Violation::required("sku", "SKU is required for all products")],
            warnings: vec![Violation::warning("basePrice", "high"), Violation::warning("x", "y")],
        };
        let record = AuditRecord::for_event(&product_event())
            .unwrap()
            .with_outcome(&outcome);
        let summary = record.outcome.unwrap();
        assert!(!summary.passed);
        assert_eq!(summary.violations, vec!["❌ REQUIRED: SKU is required for all products"]);
        assert_eq!(summary.warnings, 2);
    }

    #[test]
    fn json_uses_camel_case_and_omits_absent_fields() {
        let event = DocumentEvent::new(
            EventKind::Create,
            json!({"_id": "store-1", "_type": "storeLocation"}),
        );
        let json: serde_json::Value =
            serde_json::from_str(&AuditRecord::for_event(&event).unwrap().to_json().unwrap())
                .unwrap();
        assert_eq!(json["documentType"], "storeLocation");
        assert_eq!(json["syncSource"], "unknown");
        assert!(json.get("sku").is_none());
        assert!(json.get("outcome").is_none());
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn memory_sink_records_in_order() {
        let sink = MemorySink::new();
        let record = AuditRecord::for_event(&product_event()).unwrap();
        sink.emit(&record);
        sink.emit(&record);
        assert_eq!(sink.records().len(), 2);
    }

    #[test]
    fn arc_sink_forwards() {
        let sink = Arc::new(MemorySink::new());
        let shared: Arc<dyn AuditSink> = sink.clone();
        shared.emit(&AuditRecord::for_event(&product_event()).unwrap());
        assert_eq!(sink.records().len(), 1);
    }
}
