//! Catalog write guard: document model, rule evaluation, and audit records.
//!
//! Everything in this crate is pure logic with no I/O. The event-dispatch
//! layer lives in `catalog-events` and the HTTP adapter in `catalog-api`.

pub mod audit;
pub mod document;
pub mod error;
pub mod types;
pub mod validation;
