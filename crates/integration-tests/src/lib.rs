//! Integration test helpers for the Ostrich customer API.
//!
//! # Running Tests
//!
//! ```bash
//! # Start MySQL and run migrations
//! cargo run -p ostrich-cli -- migrate
//!
//! # Start the API
//! cargo run -p ostrich-api
//!
//! # Run the ignored integration tests
//! cargo test -p ostrich-integration-tests -- --ignored
//! ```
//!
//! Tests register throwaway customers with random phone numbers, so they
//! can run repeatedly against the same database.

use rand::Rng;
use reqwest::Client;
use serde_json::{Value, json};

/// Base URL for the customer API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("OSTRICH_BASE_URL").unwrap_or_else(|_| "http://localhost:8001".to_string())
}

/// A random Indian-format mobile number, unique enough per test run.
#[must_use]
pub fn random_phone() -> String {
    let suffix: u64 = rand::rng().random_range(1_000_000_000..=9_999_999_999);
    format!("+91{suffix}")
}

/// Register a fresh customer through the public flow and return
/// `(phone, bearer_token)`.
///
/// Uses the OTP returned in the registration payload, the same contract
/// the mobile app relies on before SMS delivery is wired up.
///
/// # Panics
///
/// Panics if any step of the registration flow fails; these helpers are
/// test-only.
pub async fn register_customer(client: &Client) -> (String, String) {
    let base = base_url();
    let phone = random_phone();

    let resp: Value = client
        .post(format!("{base}/api/v1/auth/register"))
        .json(&json!({"phone": phone, "name": "Test Customer"}))
        .send()
        .await
        .expect("register request failed")
        .json()
        .await
        .expect("register response not JSON");
    assert_eq!(resp["status"], json!(true), "registration failed: {resp}");
    let otp = resp["data"]["otp"].as_str().expect("no otp in payload").to_string();

    let resp: Value = client
        .post(format!("{base}/api/v1/auth/verify-registration"))
        .json(&json!({"phone": phone, "otp": otp}))
        .send()
        .await
        .expect("verify request failed")
        .json()
        .await
        .expect("verify response not JSON");
    assert_eq!(resp["status"], json!(true), "verification failed: {resp}");
    let token = resp["data"]["token"]
        .as_str()
        .expect("no token in payload")
        .to_string();

    (phone, token)
}
