//! HTTP-level integration tests for the `/documents/validate` dry-run gate.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, demo_burger, invalid_burger, post_json};
use serde_json::{json, Value};
use tower::ServiceExt;

const URI: &str = "/api/v1/documents/validate";

fn with(mut doc: Value, key: &str, value: Value) -> Value {
    doc[key] = value;
    doc
}

#[tokio::test]
async fn missing_type_is_a_bad_request() {
    let (app, _) = build_test_app();
    let response = post_json(app, URI, json!({"sku": "BH1001"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Missing _type field");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let (app, _) = build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri(URI)
        .header("content-type", "application/json")
        .body(Body::from("{\"_type\": \"product\""))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn compliant_product_passes_with_pim_warnings() {
    let (app, _) = build_test_app();
    let response = post_json(app, URI, demo_burger()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    assert_eq!(data["documentType"], "product");
    assert_eq!(data["evaluated"], true);
    assert_eq!(data["warnings"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn product_missing_compliance_data_is_rejected() {
    let (app, _) = build_test_app();
    let response = post_json(app, URI, invalid_burger()).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["violations"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn lowercase_sku_is_rejected_as_format_error() {
    let (app, _) = build_test_app();
    let response = post_json(app, URI, with(demo_burger(), "sku", json!("bh1001"))).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    let violations = json["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 1);
    assert!(violations[0].as_str().unwrap().starts_with("❌ FORMAT ERROR: SKU \"bh1001\""));
}

#[tokio::test]
async fn high_base_price_is_accepted() {
    let (app, _) = build_test_app();
    let response = post_json(app, URI, with(demo_burger(), "basePrice", json!(150))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["warnings"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn pricing_tier_must_be_recognized() {
    let (app, _) = build_test_app();
    let pricing = json!({
        "_type": "productPricing",
        "price": 12.5,
        "product": {"_ref": "product-bh1001"},
        "storeLocation": {"_ref": "store-jfk"}
    });

    let response = post_json(app.clone(), URI, with(pricing.clone(), "pricingTier", json!("vip"))).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = post_json(app, URI, with(pricing, "pricingTier", json!("airport"))).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn type_without_rules_is_passed_through() {
    let (app, _) = build_test_app();
    let response = post_json(app, URI, json!({"_type": "storeLocation", "name": "JFK T4"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["evaluated"], false);
}
