//! Rule set for `product` documents.
//!
//! Compliance (allergens, nutrition facts) and data-quality checks block the
//! write. Nutrition sanity checks and PIM linkage checks only warn. All checks
//! run; none short-circuits another.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{Findings, ValidationOutcome, Violation};
use crate::document::{NutritionFacts, ProductDocument};

/// Two uppercase ASCII letters followed by four ASCII digits, e.g. `BH1001`.
pub const SKU_PATTERN: &str = r"^[A-Z]{2}[0-9]{4}$";

static SKU_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(SKU_PATTERN).expect("valid regex"));

/// Calories above this are flagged as implausible.
pub const MAX_PLAUSIBLE_CALORIES: f64 = 3000.0;

/// Allowed gap between stated calories and the 4/4/9 macro estimate.
pub const CALORIE_TOLERANCE: f64 = 100.0;

/// Recommended daily sodium value in milligrams.
pub const MAX_SODIUM_MG: f64 = 2300.0;

/// Base prices above this are unusual for a menu item.
pub const UNUSUAL_BASE_PRICE: f64 = 100.0;

/// Returns `true` when `sku` has the `XX0000` shape.
pub fn is_valid_sku(sku: &str) -> bool {
    SKU_RE.is_match(sku)
}

/// Evaluate every product rule against the document.
pub fn validate_product(product: &ProductDocument) -> ValidationOutcome {
    let mut findings = Findings::default();

    check_allergens(product, &mut findings);
    check_nutrition(product.nutrition_facts.as_ref(), &mut findings);
    check_sku(product.sku.as_deref(), &mut findings);
    check_base_price(product.base_price, &mut findings);
    check_category(product, &mut findings);
    check_name(product, &mut findings);
    check_pim_linkage(product, &mut findings);

    findings.into_outcome()
}

fn check_allergens(product: &ProductDocument, findings: &mut Findings) {
    let listed = product.allergens.as_ref().is_some_and(|a| !a.is_empty());
    if !listed {
        findings.push(Violation::compliance(
            "allergens",
            "Allergen information is required for all food products. \
             This is a legal requirement and cannot be bypassed.",
        ));
    }
}

fn check_nutrition(facts: Option<&NutritionFacts>, findings: &mut Findings) {
    let Some(facts) = facts else {
        findings.push(Violation::compliance(
            "nutritionFacts",
            "Nutrition facts are required. Missing this data violates labeling regulations.",
        ));
        return;
    };

    for (field, value) in facts.present_fields() {
        if value < 0.0 {
            findings.push(Violation::warning(
                "nutritionFacts",
                format!("Nutrition value `{field}` is negative ({value}). Please verify with the PIM source."),
            ));
        }
    }

    if let Some(calories) = facts.calories {
        if calories > MAX_PLAUSIBLE_CALORIES {
            findings.push(Violation::warning(
                "nutritionFacts.calories",
                "Calories exceed 3000, which is unusually high. Please verify with the PIM source.",
            ));
        }
    }

    if let (Some(calories), Some(protein), Some(carbs), Some(fat)) =
        (facts.calories, facts.protein, facts.carbs, facts.fat)
    {
        let expected = protein * 4.0 + carbs * 4.0 + fat * 9.0;
        if (calories - expected).abs() > CALORIE_TOLERANCE {
            findings.push(Violation::warning(
                "nutritionFacts.calories",
                format!(
                    "Calorie calculation ({expected}) differs significantly from stated \
                     calories ({calories}). Please verify macronutrients."
                ),
            ));
        }
    }

    if let Some(sodium) = facts.sodium {
        if sodium > MAX_SODIUM_MG {
            findings.push(Violation::warning(
                "nutritionFacts.sodium",
                "Sodium exceeds recommended daily value (2300mg). Consider flagging for customers.",
            ));
        }
    }
}

fn check_sku(sku: Option<&str>, findings: &mut Findings) {
    match sku.filter(|s| !s.is_empty()) {
        None => findings.push(Violation::required("sku", "SKU is required for all products")),
        Some(sku) if !is_valid_sku(sku) => findings.push(Violation::format(
            "sku",
            format!("SKU \"{sku}\" is invalid. Must be format XX0000 (e.g., BH1001, CH2001)"),
        )),
        Some(_) => {}
    }
}

fn check_base_price(base_price: Option<f64>, findings: &mut Findings) {
    match base_price {
        None => findings.push(Violation::required("basePrice", "Base price is required")),
        Some(price) if price <= 0.0 => findings.push(Violation::invalid(
            "basePrice",
            "Base price must be greater than $0",
        )),
        Some(price) if price > UNUSUAL_BASE_PRICE => findings.push(Violation::warning(
            "basePrice",
            "Base price over $100 is unusual for menu items. Please verify with the PIM source.",
        )),
        Some(_) => {}
    }
}

fn check_category(product: &ProductDocument, findings: &mut Findings) {
    if product.category.as_deref().is_none_or(str::is_empty) {
        findings.push(Violation::required(
            "category",
            "Product must have a category assigned",
        ));
    }
}

fn check_name(product: &ProductDocument, findings: &mut Findings) {
    if product.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
        findings.push(Violation::required("name", "Product name is required"));
    }
}

fn check_pim_linkage(product: &ProductDocument, findings: &mut Findings) {
    if product.pim_product_id.as_deref().is_none_or(str::is_empty) {
        findings.push(Violation::warning(
            "pimProductId",
            "No PIM Product ID. This product may not be properly synced with the external PIM system.",
        ));
    }

    let sync_source = product
        .pim_metadata
        .as_ref()
        .and_then(|m| m.sync_source.as_deref());
    if sync_source.is_none_or(str::is_empty) {
        findings.push(Violation::warning(
            "pimMetadata.syncSource",
            "No sync source identified. Unable to track which PIM system this came from.",
        ));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
