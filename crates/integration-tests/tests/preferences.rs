//! Integration tests for the customer settings endpoints.
//!
//! These tests require:
//! - A running MySQL database with migrations applied
//! - The API server running (cargo run -p ostrich-api)
//!
//! Run with: cargo test -p ostrich-integration-tests -- --ignored

use ostrich_integration_tests::{base_url, register_customer};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

async fn get_settings(client: &Client, token: &str) -> Value {
    client
        .get(format!("{}/api/v1/utilities/settings", base_url()))
        .bearer_auth(token)
        .send()
        .await
        .expect("settings request failed")
        .json()
        .await
        .expect("settings response not JSON")
}

async fn put_settings(client: &Client, token: &str, body: &Value) -> (StatusCode, Value) {
    let resp = client
        .put(format!("{}/api/v1/utilities/settings", base_url()))
        .bearer_auth(token)
        .json(body)
        .send()
        .await
        .expect("settings update failed");
    let status = resp.status();
    let value = resp.json().await.expect("settings response not JSON");
    (status, value)
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_first_read_creates_defaults() {
    let client = Client::new();
    let (_phone, token) = register_customer(&client).await;

    let resp = get_settings(&client, &token).await;
    assert_eq!(resp["status"], json!(true));
    assert_eq!(resp["data"]["email_notifications"], json!(true));
    assert_eq!(resp["data"]["sms_notifications"], json!(true));
    assert_eq!(resp["data"]["push_notifications"], json!(true));
    assert_eq!(resp["data"]["location_sharing"], json!(false));

    // A second read returns the same record, not a fresh one
    let again = get_settings(&client, &token).await;
    assert_eq!(again["data"], resp["data"]);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_partial_update_leaves_other_fields() {
    let client = Client::new();
    let (_phone, token) = register_customer(&client).await;

    let (status, resp) =
        put_settings(&client, &token, &json!({"location_sharing": true})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["data"]["location_sharing"], json!(true));
    assert_eq!(resp["data"]["email_notifications"], json!(true));
    assert_eq!(resp["data"]["sms_notifications"], json!(true));
    assert_eq!(resp["data"]["push_notifications"], json!(true));
    assert!(resp["data"]["updated_at"].is_string());
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_update_persists_across_reads() {
    let client = Client::new();
    let (_phone, token) = register_customer(&client).await;

    put_settings(&client, &token, &json!({"sms_notifications": false})).await;

    let resp = get_settings(&client, &token).await;
    assert_eq!(resp["data"]["sms_notifications"], json!(false));
    assert_eq!(resp["data"]["email_notifications"], json!(true));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_unknown_field_rejected_and_record_unchanged() {
    let client = Client::new();
    let (_phone, token) = register_customer(&client).await;

    let before = get_settings(&client, &token).await;

    let (status, resp) = put_settings(
        &client,
        &token,
        &json!({"email_notifications": false, "dark_mode": true}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["status"], json!(false));
    assert!(
        resp["message"].as_str().unwrap_or_default().contains("dark_mode"),
        "message should name the offending field: {resp}"
    );

    let after = get_settings(&client, &token).await;
    assert_eq!(after["data"], before["data"]);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_non_boolean_value_rejected() {
    let client = Client::new();
    let (_phone, token) = register_customer(&client).await;

    let (status, resp) =
        put_settings(&client, &token, &json!({"push_notifications": "off"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        resp["message"]
            .as_str()
            .unwrap_or_default()
            .contains("push_notifications"),
        "message should name the offending field: {resp}"
    );
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_empty_update_returns_current_record() {
    let client = Client::new();
    let (_phone, token) = register_customer(&client).await;

    let (status, resp) = put_settings(&client, &token, &json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["data"]["email_notifications"], json!(true));
    assert_eq!(resp["data"]["location_sharing"], json!(false));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_settings_require_authentication() {
    let client = Client::new();
    let resp = client
        .get(format!("{}/api/v1/utilities/settings", base_url()))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

/// Two concurrent updates touching different fields must both survive.
#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_concurrent_updates_to_different_fields_both_apply() {
    let client = Client::new();
    let (_phone, token) = register_customer(&client).await;

    // Ensure the row exists before racing the updates
    get_settings(&client, &token).await;

    let email_body = json!({"email_notifications": false});
    let location_body = json!({"location_sharing": true});
    let email_update = put_settings(&client, &token, &email_body);
    let location_update = put_settings(&client, &token, &location_body);
    let (email_result, location_result) = tokio::join!(email_update, location_update);
    assert_eq!(email_result.0, StatusCode::OK);
    assert_eq!(location_result.0, StatusCode::OK);

    let resp = get_settings(&client, &token).await;
    assert_eq!(resp["data"]["email_notifications"], json!(false));
    assert_eq!(resp["data"]["location_sharing"], json!(true));
}
