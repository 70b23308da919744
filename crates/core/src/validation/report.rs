//! Rendering of a rejected write into the message shown to the writer.

use std::fmt;

use serde::Serialize;

use super::rules::Violation;
use crate::document::DocumentKind;

const FOOTER: [&str; 2] = [
    "This write has been rejected to maintain data quality and compliance.",
    "Please correct the errors in your PIM system and retry the sync.",
];

/// A rejected write: the blocking violations plus any advisory warnings.
///
/// The `Display` form is the full multi-line message the host surfaces
/// verbatim to whoever attempted the write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    pub kind: DocumentKind,
    pub document_id: Option<String>,
    pub violations: Vec<Violation>,
    pub warnings: Vec<Violation>,
}

impl Rejection {
    pub fn banner(&self) -> &'static str {
        match self.kind {
            DocumentKind::Product => "🚫 PRODUCT VALIDATION FAILED",
            DocumentKind::ProductPricing => "🚫 PRICING VALIDATION FAILED",
        }
    }

    /// Banner, violations, optional warnings section, then the footer.
    pub fn render(&self) -> String {
        let mut lines = vec![self.banner().to_string(), String::new()];
        lines.extend(self.violations.iter().map(ToString::to_string));
        lines.push(String::new());

        if !self.warnings.is_empty() {
            lines.push("Warnings (non-blocking):".to_string());
            lines.extend(self.warnings.iter().map(ToString::to_string));
            lines.push(String::new());
        }

        lines.push("---".to_string());
        lines.extend(FOOTER.iter().map(|l| l.to_string()));
        lines.join("\n")
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for Rejection {}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejection(warnings: Vec<Violation>) -> Rejection {
        Rejection {
            kind: DocumentKind::Product,
            document_id: Some("product-1".into()),
            violations: vec![
                Violation::compliance("allergens", "Allergens missing."),
                Violation::required("sku", "SKU is required for all products"),
            ],
            warnings,
        }
    }

    #[test]
    fn render_without_warnings_omits_section() {
        let expected = "\
🚫 PRODUCT VALIDATION FAILED

⚠️ COMPLIANCE VIOLATION: Allergens missing.
❌ REQUIRED: SKU is required for all products

---
This write has been rejected to maintain data quality and compliance.
Please correct the errors in your PIM system and retry the sync.";
        assert_eq!(rejection(vec![]).render(), expected);
    }

    #[test]
    fn render_itemizes_warnings() {
        let message = rejection(vec![Violation::warning("basePrice", "Pricey.")]).render();
        assert!(message.contains("\n\nWarnings (non-blocking):\n⚠️ WARNING: Pricey.\n\n---\n"));
    }

    #[test]
    fn display_matches_render() {
        let r = rejection(vec![]);
        assert_eq!(r.to_string(), r.render());
    }

    #[test]
    fn pricing_uses_its_own_banner() {
        let mut r = rejection(vec![]);
        r.kind = DocumentKind::ProductPricing;
        assert!(r.render().starts_with("🚫 PRICING VALIDATION FAILED\n"));
    }
}
