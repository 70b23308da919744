//! Event-level entry point: picks the rule set for a mutation event.

use serde_json::Value;

use super::pricing::validate_pricing;
use super::product::validate_product;
use super::report::Rejection;
use super::rules::{ValidationOutcome, Violation};
use crate::document::{DocumentEvent, DocumentKind, PricingDocument, ProductDocument};

/// Result of running a rule set against one document snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub kind: DocumentKind,
    pub document_id: Option<String>,
    pub outcome: ValidationOutcome,
}

impl Evaluation {
    /// `Ok(warnings)` when accepted, `Err(Rejection)` otherwise.
    pub fn into_result(self) -> Result<Vec<Violation>, Rejection> {
        match self.outcome {
            ValidationOutcome::Accepted { warnings } => Ok(warnings),
            ValidationOutcome::Rejected {
                violations,
                warnings,
            } => Err(Rejection {
                kind: self.kind,
                document_id: self.document_id,
                violations,
                warnings,
            }),
        }
    }
}

/// Run the rule set for `kind` against a raw document snapshot.
pub fn validate_document(kind: DocumentKind, snapshot: &Value) -> Evaluation {
    let (document_id, outcome) = match kind {
        DocumentKind::Product => {
            let product = ProductDocument::from_snapshot(snapshot);
            let outcome = validate_product(&product);
            (product.id, outcome)
        }
        DocumentKind::ProductPricing => {
            let pricing = PricingDocument::from_snapshot(snapshot);
            let outcome = validate_pricing(&pricing);
            (pricing.id, outcome)
        }
    };

    Evaluation {
        kind,
        document_id,
        outcome,
    }
}

/// Validate a mutation event.
///
/// Returns `None` (pass-through, nothing evaluated) for anything other than a
/// create or update, for events missing a document snapshot or a type, and
/// for document types that have no rule set.
pub fn validate_event(event: &DocumentEvent) -> Option<Evaluation> {
    if !event.kind.is_write() {
        return None;
    }
    let snapshot = event.snapshot()?;
    let kind = DocumentKind::from_type_name(event.document_type()?)?;
    Some(validate_document(kind, snapshot))
}
