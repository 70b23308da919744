#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;
use catalog_events::SyncLogCollector;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3333".to_string()],
        request_timeout_secs: 30,
        audit_bus_capacity: 64,
    }
}

/// Build the full application router with the production middleware stack,
/// plus a running sync log collector. Must be called inside a Tokio runtime.
pub fn build_test_app() -> (Router, AppState) {
    let state = AppState::new(test_config());
    tokio::spawn(SyncLogCollector::run(
        state.sync_logs.clone(),
        state.audit_bus.subscribe(),
    ));
    let app = build_app_router(state.clone()).expect("test config has valid origins");
    (app, state)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The end-to-end compliant product.
pub fn demo_burger() -> Value {
    serde_json::json!({
        "_id": "product-bh9999",
        "_type": "product",
        "sku": "BH9999",
        "name": "Demo Test Burger",
        "category": "burgers",
        "basePrice": 8.99,
        "allergens": ["dairy", "wheat", "soy"],
        "nutritionFacts": {"calories": 650, "protein": 35, "carbs": 45, "fat": 28, "sodium": 980}
    })
}

/// The end-to-end product missing allergens and nutrition facts.
pub fn invalid_burger() -> Value {
    serde_json::json!({
        "_id": "product-bh9998",
        "_type": "product",
        "sku": "BH9998",
        "name": "Invalid Test Burger",
        "category": "burgers",
        "basePrice": 8.99
    })
}

pub fn create_event(document: Value) -> Value {
    serde_json::json!({"type": "document.create", "document": document})
}
