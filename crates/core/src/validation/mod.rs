//! Write validation engine for catalog documents.
//!
//! Pure, synchronous rule evaluation: the same snapshot always yields the same
//! outcome and the same message text. Logging and audit emission are the
//! caller's concern.

pub mod evaluator;
pub mod pricing;
pub mod product;
pub mod report;
pub mod rules;

pub use evaluator::{validate_document, validate_event, Evaluation};
pub use report::Rejection;
pub use rules::{ValidationOutcome, Violation, ViolationKind};
