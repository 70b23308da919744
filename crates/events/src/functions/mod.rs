//! Named document functions bound to catalog write events.
//!
//! Each function declares an [`EventFilter`]; the
//! [`Dispatcher`](crate::dispatcher::Dispatcher) only invokes it for events
//! the filter matches.

mod sync_audit_trail;
mod validate_catalog_writes;

pub use sync_audit_trail::SyncAuditTrail;
pub use validate_catalog_writes::ValidateCatalogWrites;

use catalog_core::document::DocumentEvent;
use catalog_core::error::CoreError;

/// Which events a function is subscribed to: creates and updates of the
/// listed document types.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub document_types: &'static [&'static str],
}

impl EventFilter {
    pub fn matches(&self, event: &DocumentEvent) -> bool {
        event.kind.is_write()
            && event
                .document_type()
                .is_some_and(|t| self.document_types.contains(&t))
    }
}

/// A handler invoked synchronously for each matching document event.
///
/// Returning an error aborts the write; functions that must never block a
/// write always return `Ok(())`.
pub trait DocumentFunction: Send + Sync {
    fn name(&self) -> &'static str;

    fn filter(&self) -> EventFilter;

    fn handle(&self, event: &DocumentEvent) -> Result<(), CoreError>;
}
