//! Integration tests for the authentication flows.
//!
//! These tests require:
//! - A running MySQL database with migrations applied
//! - The API server running (cargo run -p ostrich-api)
//!
//! Run with: cargo test -p ostrich-integration-tests -- --ignored

use ostrich_integration_tests::{base_url, random_phone, register_customer};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_register_verify_and_use_token() {
    let client = Client::new();
    let (_phone, token) = register_customer(&client).await;

    let resp: Value = client
        .get(format!("{}/api/v1/profile", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("profile request failed")
        .json()
        .await
        .expect("profile response not JSON");
    assert_eq!(resp["status"], json!(true));
    assert_eq!(resp["data"]["name"], json!("Test Customer"));
    assert_eq!(resp["data"]["is_verified"], json!(true));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_duplicate_registration_rejected() {
    let client = Client::new();
    let (phone, _token) = register_customer(&client).await;

    let resp = client
        .post(format!("{}/api/v1/auth/register", base_url()))
        .json(&json!({"phone": phone, "name": "Someone Else"}))
        .send()
        .await
        .expect("register request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_otp_login_round_trip() {
    let client = Client::new();
    let (phone, _token) = register_customer(&client).await;

    let resp: Value = client
        .post(format!("{}/api/v1/auth/send-otp", base_url()))
        .json(&json!({"phone": phone}))
        .send()
        .await
        .expect("send-otp failed")
        .json()
        .await
        .expect("send-otp response not JSON");
    let otp = resp["data"]["otp"].as_str().expect("no otp").to_string();

    let resp: Value = client
        .post(format!("{}/api/v1/auth/verify-otp", base_url()))
        .json(&json!({"phone": phone, "otp": otp}))
        .send()
        .await
        .expect("verify-otp failed")
        .json()
        .await
        .expect("verify-otp response not JSON");
    assert_eq!(resp["status"], json!(true));
    assert!(resp["data"]["token"].is_string());
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_otp_cannot_be_reused() {
    let client = Client::new();
    let (phone, _token) = register_customer(&client).await;

    let resp: Value = client
        .post(format!("{}/api/v1/auth/send-otp", base_url()))
        .json(&json!({"phone": phone}))
        .send()
        .await
        .expect("send-otp failed")
        .json()
        .await
        .expect("send-otp response not JSON");
    let otp = resp["data"]["otp"].as_str().expect("no otp").to_string();

    let first = client
        .post(format!("{}/api/v1/auth/verify-otp", base_url()))
        .json(&json!({"phone": phone, "otp": otp}))
        .send()
        .await
        .expect("verify-otp failed");
    assert_eq!(first.status(), StatusCode::OK);

    let second = client
        .post(format!("{}/api/v1/auth/verify-otp", base_url()))
        .json(&json!({"phone": phone, "otp": otp}))
        .send()
        .await
        .expect("verify-otp failed");
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_password_set_and_login() {
    let client = Client::new();
    let (phone, token) = register_customer(&client).await;

    let resp = client
        .post(format!("{}/api/v1/profile/set-password", base_url()))
        .bearer_auth(&token)
        .json(&json!({"password": "a long enough password"}))
        .send()
        .await
        .expect("set-password failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp: Value = client
        .post(format!("{}/api/v1/auth/login", base_url()))
        .json(&json!({"phone": phone, "password": "a long enough password"}))
        .send()
        .await
        .expect("login failed")
        .json()
        .await
        .expect("login response not JSON");
    assert_eq!(resp["status"], json!(true));
    assert!(resp["data"]["token"].is_string());

    let bad = client
        .post(format!("{}/api/v1/auth/login", base_url()))
        .json(&json!({"phone": phone, "password": "wrong password here"}))
        .send()
        .await
        .expect("login failed");
    assert_eq!(bad.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_send_otp_for_unknown_phone_is_not_found() {
    let client = Client::new();
    let resp = client
        .post(format!("{}/api/v1/auth/send-otp", base_url()))
        .json(&json!({"phone": random_phone()}))
        .send()
        .await
        .expect("send-otp failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_garbage_bearer_token_rejected() {
    let client = Client::new();
    let resp = client
        .get(format!("{}/api/v1/dashboard", base_url()))
        .bearer_auth("not.a.jwt")
        .send()
        .await
        .expect("dashboard request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
