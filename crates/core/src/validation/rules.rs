//! Violation and outcome types shared by every rule set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a rule failure. Selects the glyph and label of the rendered
/// line, and whether the failure blocks the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Legally required data is missing.
    Compliance,
    Required,
    Format,
    Invalid,
    /// Advisory only.
    Warning,
}

impl ViolationKind {
    pub fn is_blocking(self) -> bool {
        !matches!(self, Self::Warning)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Compliance | Self::Warning => "⚠️",
            Self::Required | Self::Format | Self::Invalid => "❌",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Compliance => "COMPLIANCE VIOLATION",
            Self::Required => "REQUIRED",
            Self::Format => "FORMAT ERROR",
            Self::Invalid => "INVALID",
            Self::Warning => "WARNING",
        }
    }
}

/// A single rule failure against one document field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, field: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn compliance(field: &str, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Compliance, field, message)
    }

    pub fn required(field: &str, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Required, field, message)
    }

    pub fn format(field: &str, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Format, field, message)
    }

    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Invalid, field, message)
    }

    pub fn warning(field: &str, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Warning, field, message)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.kind.glyph(),
            self.kind.label(),
            self.message
        )
    }
}

/// Accept/reject decision for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Accepted {
        warnings: Vec<Violation>,
    },
    Rejected {
        violations: Vec<Violation>,
        warnings: Vec<Violation>,
    },
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Blocking violations (empty when accepted).
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Accepted { .. } => &[],
            Self::Rejected { violations, .. } => violations,
        }
    }

    pub fn warnings(&self) -> &[Violation] {
        match self {
            Self::Accepted { warnings } | Self::Rejected { warnings, .. } => warnings,
        }
    }
}

/// Accumulates rule failures, routing each by its kind.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    violations: Vec<Violation>,
    warnings: Vec<Violation>,
}

impl Findings {
    pub(crate) fn push(&mut self, violation: Violation) {
        if violation.kind.is_blocking() {
            self.violations.push(violation);
        } else {
            self.warnings.push(violation);
        }
    }

    pub(crate) fn into_outcome(self) -> ValidationOutcome {
        if self.violations.is_empty() {
            ValidationOutcome::Accepted {
                warnings: self.warnings,
            }
        } else {
            ValidationOutcome::Rejected {
                violations: self.violations,
                warnings: self.warnings,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_glyph_and_label() {
        let v = Violation::required("sku", "SKU is required for all products");
        assert_eq!(v.to_string(), "❌ REQUIRED: SKU is required for all products");

        let w = Violation::warning("basePrice", "Check this");
        assert_eq!(w.to_string(), "⚠️ WARNING: Check this");
    }

    #[test]
    fn findings_with_only_warnings_accept() {
        let mut findings = Findings::default();
        findings.push(Violation::warning("sodium", "high"));
        let outcome = findings.into_outcome();
        assert!(outcome.is_accepted());
        assert!(outcome.violations().is_empty());
        assert_eq!(outcome.warnings().len(), 1);
    }

    #[test]
    fn any_blocking_finding_rejects() {
        let mut findings = Findings::default();
        findings.push(Violation::warning("sodium", "high"));
        findings.push(Violation::invalid("price", "negative"));
        let outcome = findings.into_outcome();
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.violations().len(), 1);
        assert_eq!(outcome.warnings().len(), 1);
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let outcome = ValidationOutcome::Accepted { warnings: vec![] };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "accepted");
    }
}
