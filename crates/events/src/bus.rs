//! In-process audit bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`AuditBus`] fans every emitted [`AuditRecord`] out to any number of
//! subscribers (the sync-log collector, tests). It is shared via
//! `Arc<AuditBus>` and doubles as an [`AuditSink`].

use catalog_core::audit::{AuditRecord, AuditSink};
use tokio::sync::broadcast;

/// Default buffer capacity for the broadcast channel.
pub const DEFAULT_CAPACITY: usize = 1024;

pub struct AuditBus {
    sender: broadcast::Sender<AuditRecord>,
}

impl AuditBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest unread records are dropped and slow
    /// receivers observe `RecvError::Lagged`. A capacity of zero is raised
    /// to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish a record to all current subscribers.
    ///
    /// With no subscribers the record is dropped.
    pub fn publish(&self, record: AuditRecord) {
        // SendError only means there are zero receivers.
        let _ = self.sender.send(record);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AuditRecord> {
        self.sender.subscribe()
    }
}

impl Default for AuditBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl AuditSink for AuditBus {
    fn emit(&self, record: &AuditRecord) {
        self.publish(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::document::{DocumentEvent, EventKind};
    use serde_json::json;

    fn record(id: &str) -> AuditRecord {
        let event = DocumentEvent::new(EventKind::Create, json!({"_id": id, "_type": "product"}));
        AuditRecord::for_event(&event).unwrap()
    }

    #[tokio::test]
    async fn every_subscriber_receives_each_record() {
        let bus = AuditBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.emit(&record("p1"));

        let r1 = rx1.recv().await.expect("subscriber 1 should receive");
        let r2 = rx2.recv().await.expect("subscriber 2 should receive");
        assert_eq!(r1.document_id.as_deref(), Some("p1"));
        assert_eq!(r2.document_id.as_deref(), Some("p1"));
    }

    #[tokio::test]
    async fn zero_capacity_is_raised_to_one() {
        let bus = AuditBus::new(0);
        let mut rx = bus.subscribe();

        bus.emit(&record("p1"));

        let received = rx.recv().await.expect("record should be buffered");
        assert_eq!(received.document_id.as_deref(), Some("p1"));
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = AuditBus::default();
        bus.publish(record("orphan"));
    }
}
