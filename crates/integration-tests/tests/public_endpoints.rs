//! Integration tests for unauthenticated endpoints.
//!
//! These tests require:
//! - A running MySQL database with migrations applied
//! - The API server running (cargo run -p ostrich-api)
//!
//! Run with: cargo test -p ostrich-integration-tests -- --ignored

use ostrich_integration_tests::base_url;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_health_endpoints() {
    let client = Client::new();

    let live = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("health request failed");
    assert_eq!(live.status(), StatusCode::OK);

    let ready = client
        .get(format!("{}/health/ready", base_url()))
        .send()
        .await
        .expect("ready request failed");
    assert_eq!(ready.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_catalog_is_public() {
    let client = Client::new();

    let resp: Value = client
        .get(format!("{}/api/v1/catalog/products", base_url()))
        .send()
        .await
        .expect("catalog request failed")
        .json()
        .await
        .expect("catalog response not JSON");
    assert_eq!(resp["status"], json!(true));
    assert!(resp["data"].is_array());

    let resp: Value = client
        .get(format!("{}/api/v1/catalog/categories", base_url()))
        .send()
        .await
        .expect("categories request failed")
        .json()
        .await
        .expect("categories response not JSON");
    assert_eq!(resp["status"], json!(true));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_catalog_search_filter() {
    let client = Client::new();
    let resp: Value = client
        .get(format!(
            "{}/api/v1/catalog/products?search=Inverter",
            base_url()
        ))
        .send()
        .await
        .expect("catalog request failed")
        .json()
        .await
        .expect("catalog response not JSON");
    let products = resp["data"].as_array().expect("data not an array");
    for product in products {
        let name = product["name"].as_str().unwrap_or_default();
        let model = product["model_number"].as_str().unwrap_or_default();
        assert!(
            name.contains("Inverter") || model.contains("Inverter"),
            "unexpected search hit: {product}"
        );
    }
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_gallery_is_public() {
    let client = Client::new();
    let resp: Value = client
        .get(format!("{}/api/v1/gallery", base_url()))
        .send()
        .await
        .expect("gallery request failed")
        .json()
        .await
        .expect("gallery response not JSON");
    assert_eq!(resp["status"], json!(true));
    for image in resp["data"].as_array().expect("data not an array") {
        assert!(image["url"].is_string());
        assert!(image.get("product_name").is_some());
    }
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_support_content() {
    let client = Client::new();
    let resp: Value = client
        .get(format!("{}/api/v1/support/faq", base_url()))
        .send()
        .await
        .expect("faq request failed")
        .json()
        .await
        .expect("faq response not JSON");
    assert_eq!(resp["status"], json!(true));
    assert!(!resp["data"].as_array().expect("faq not an array").is_empty());
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_envelope_shape_on_error() {
    let client = Client::new();
    let resp = client
        .get(format!("{}/api/v1/orders", base_url()))
        .send()
        .await
        .expect("orders request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = resp.json().await.expect("error response not JSON");
    assert_eq!(body["status"], json!(false));
    assert!(body["message"].is_string());
    assert!(body["data"].is_null());
}
