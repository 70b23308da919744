//! Routes document mutation events to the registered document functions.
//!
//! [`Dispatcher::catalog`] wires up the catalog dataset: write validation for
//! products and pricing, plus the sync audit trail for products, pricing, and
//! store locations.

use std::sync::Arc;

use catalog_core::audit::AuditSink;
use catalog_core::document::DocumentEvent;
use catalog_core::error::CoreError;
use serde::Serialize;

use crate::functions::{DocumentFunction, SyncAuditTrail, ValidateCatalogWrites};

/// Which functions an event was handed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    pub invoked: Vec<&'static str>,
}

#[derive(Default)]
pub struct Dispatcher {
    functions: Vec<Box<dyn DocumentFunction>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog dataset's function set, all auditing to `sink`.
    pub fn catalog(sink: Arc<dyn AuditSink>) -> Self {
        Self::new()
            .register(ValidateCatalogWrites::new(Arc::clone(&sink)))
            .register(SyncAuditTrail::new(sink))
    }

    pub fn register(mut self, function: impl DocumentFunction + 'static) -> Self {
        self.functions.push(Box::new(function));
        self
    }

    pub fn function_names(&self) -> Vec<&'static str> {
        self.functions.iter().map(|f| f.name()).collect()
    }

    /// Hand the event to every function whose filter matches, in registration
    /// order.
    ///
    /// Every matching function runs even after one has rejected, so audit
    /// functions still see rejected writes. The first rejection is returned.
    pub fn dispatch(&self, event: &DocumentEvent) -> Result<DispatchReport, CoreError> {
        Self::run(
            self.functions.iter().filter(|f| f.filter().matches(event)),
            event,
        )
    }

    /// Hand the event to a single named function, still subject to its
    /// filter. Returns `None` for an unknown name.
    pub fn dispatch_to(
        &self,
        name: &str,
        event: &DocumentEvent,
    ) -> Option<Result<DispatchReport, CoreError>> {
        let function = self.functions.iter().find(|f| f.name() == name)?;
        let matching = function.filter().matches(event).then_some(function);
        Some(Self::run(matching.into_iter(), event))
    }

    fn run<'a>(
        functions: impl Iterator<Item = &'a Box<dyn DocumentFunction>>,
        event: &DocumentEvent,
    ) -> Result<DispatchReport, CoreError> {
        let mut report = DispatchReport::default();
        let mut first_error = None;

        for function in functions {
            report.invoked.push(function.name());
            if let Err(e) = function.handle(event) {
                match first_error {
                    None => first_error = Some(e),
                    Some(_) => tracing::warn!(
                        function = function.name(),
                        error = %e,
                        "Additional rejection after the first"
                    ),
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(report),
        }
    }
}
