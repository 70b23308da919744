//! Rule set for `productPricing` documents.
//!
//! Location pricing has no warning tier: a price above the ceiling is
//! rejected outright, unlike a product's catalog base price.

use super::rules::{Findings, ValidationOutcome, Violation};
use crate::document::PricingDocument;

/// Highest location price accepted.
pub const MAX_PRICE: f64 = 100.0;

/// Recognized values of `pricingTier`.
pub const PRICING_TIERS: &[&str] = &["standard", "premium", "value", "airport"];

/// Evaluate every pricing rule against the document.
pub fn validate_pricing(pricing: &PricingDocument) -> ValidationOutcome {
    let mut findings = Findings::default();

    match pricing.price {
        None => findings.push(Violation::required("price", "Price is required")),
        Some(price) if price < 0.0 => {
            findings.push(Violation::invalid("price", "Price cannot be negative"))
        }
        Some(price) if price > MAX_PRICE => findings.push(Violation::invalid(
            "price",
            "Price over $100 is not allowed for menu items",
        )),
        Some(_) => {}
    }

    if pricing.product.is_none() {
        findings.push(Violation::required(
            "product",
            "Pricing must reference a product",
        ));
    }

    if pricing.store_location.is_none() {
        findings.push(Violation::required(
            "storeLocation",
            "Pricing must reference a store location",
        ));
    }

    if let Some(tier) = pricing.pricing_tier.as_deref().filter(|t| !t.is_empty()) {
        if !PRICING_TIERS.contains(&tier) {
            findings.push(Violation::invalid(
                "pricingTier",
                format!("Pricing tier \"{tier}\" is not recognized"),
            ));
        }
    }

    findings.into_outcome()
}
