use std::sync::Arc;

use catalog_core::audit::{AuditRecord, AuditSink};
use catalog_core::document::{document_types, DocumentEvent};
use catalog_core::error::CoreError;
use catalog_core::validation::{validate_event, Violation};

use super::{DocumentFunction, EventFilter};

/// Enforces the product and pricing rule sets on every write, whether it
/// comes from the authoring UI or straight from the PIM through the API.
pub struct ValidateCatalogWrites {
    sink: Arc<dyn AuditSink>,
}

impl ValidateCatalogWrites {
    pub const NAME: &'static str = "validate-catalog-writes";

    pub fn new(sink: Arc<dyn AuditSink>) -> Self {
        Self { sink }
    }
}

fn messages(violations: &[Violation]) -> Vec<String> {
    violations.iter().map(ToString::to_string).collect()
}

impl DocumentFunction for ValidateCatalogWrites {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn filter(&self) -> EventFilter {
        EventFilter {
            document_types: &[document_types::PRODUCT, document_types::PRODUCT_PRICING],
        }
    }

    fn handle(&self, event: &DocumentEvent) -> Result<(), CoreError> {
        let Some(evaluation) = validate_event(event) else {
            return Ok(());
        };

        let document_id = evaluation.document_id.clone().unwrap_or_default();
        let document_type = evaluation.kind.as_str();
        tracing::debug!(
            operation = event.kind.as_operation(),
            document_type,
            %document_id,
            "Validating catalog write"
        );

        if let Some(record) = AuditRecord::for_event(event) {
            self.sink.emit(&record.with_outcome(&evaluation.outcome));
        }

        let warnings = evaluation.outcome.warnings();
        if !warnings.is_empty() {
            tracing::warn!(
                document_type,
                %document_id,
                warnings = ?messages(warnings),
                "Catalog write has validation warnings"
            );
        }

        match evaluation.into_result() {
            Ok(warnings) => {
                tracing::info!(
                    document_type,
                    %document_id,
                    warnings = warnings.len(),
                    "Catalog write passed validation"
                );
                Ok(())
            }
            Err(rejection) => {
                tracing::error!(
                    document_type,
                    %document_id,
                    errors = ?messages(&rejection.violations),
                    "Catalog write rejected"
                );
                Err(rejection.into())
            }
        }
    }
}
