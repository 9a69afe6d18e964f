//! Phone-first authentication: OTP issue/verify, password login,
//! registration, and password recovery.
//!
//! OTP codes are returned in the response payload; SMS delivery is handled
//! by an external gateway that reads the same table.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use ostrich_core::{Email, Phone};
use serde::Deserialize;
use serde_json::json;

use crate::db::otp::OtpPurpose;
use crate::db::{CustomerRepository, OtpRepository};
use crate::error::{AppError, Result};
use crate::middleware::CurrentCustomer;
use crate::models::customer::{Customer, RegistrationRequest};
use crate::response::ApiResponse;
use crate::services::auth::{
    self, AuthError, generate_otp_code, generate_reference, hash_password,
    validate_password_strength,
};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/check-phone", post(check_phone))
        .route("/send-otp", post(send_otp))
        .route("/verify-otp", post(verify_otp))
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/verify-registration", post(verify_registration))
        .route("/forgot-password", post(forgot_password))
        .route("/reset-password", post(reset_password))
        .route("/logout", post(logout))
}

#[derive(Debug, Deserialize)]
struct PhonePayload {
    phone: String,
}

#[derive(Debug, Deserialize)]
struct OtpPayload {
    phone: String,
    otp: String,
}

#[derive(Debug, Deserialize)]
struct LoginPayload {
    phone: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct ResetPayload {
    phone: String,
    otp: String,
    new_password: String,
}

fn normalize_phone(raw: &str) -> Result<Phone> {
    Phone::parse(raw).map_err(|e| AppError::BadRequest(e.to_string()))
}

fn login_payload(state: &AppState, customer: &Customer) -> Result<serde_json::Value> {
    let token = state.tokens().issue(customer.id, &customer.phone)?;
    Ok(json!({
        "token": token,
        "customer": customer.to_profile(),
    }))
}

/// Tells the app which login flow to offer for a phone number.
async fn check_phone(
    State(state): State<AppState>,
    Json(payload): Json<PhonePayload>,
) -> Result<Json<ApiResponse>> {
    let phone = normalize_phone(&payload.phone)?;
    let customer = CustomerRepository::new(state.pool().clone())
        .find_by_phone(phone.as_str())
        .await?;
    let data = customer.map_or_else(
        || json!({"registered": false, "has_password": false, "is_verified": false}),
        |c| {
            json!({
                "registered": true,
                "has_password": c.has_password(),
                "is_verified": c.is_verified,
            })
        },
    );
    Ok(ApiResponse::ok("Phone status", data))
}

async fn send_otp(
    State(state): State<AppState>,
    Json(payload): Json<PhonePayload>,
) -> Result<Json<ApiResponse>> {
    let phone = normalize_phone(&payload.phone)?;
    let customers = CustomerRepository::new(state.pool().clone());
    if customers.find_by_phone(phone.as_str()).await?.is_none() {
        return Err(AuthError::PhoneNotRegistered.into());
    }

    let code = generate_otp_code();
    let expires_at = OtpRepository::new(state.pool().clone())
        .issue(phone.as_str(), &code, OtpPurpose::Login)
        .await?;
    Ok(ApiResponse::ok(
        "OTP sent",
        json!({"otp": code, "expires_at": expires_at}),
    ))
}

async fn verify_otp(
    State(state): State<AppState>,
    Json(payload): Json<OtpPayload>,
) -> Result<Json<ApiResponse>> {
    let phone = normalize_phone(&payload.phone)?;
    let consumed = OtpRepository::new(state.pool().clone())
        .consume(phone.as_str(), &payload.otp, OtpPurpose::Login)
        .await?;
    if !consumed {
        return Err(AuthError::InvalidOtp.into());
    }

    let customers = CustomerRepository::new(state.pool().clone());
    let customer = customers
        .find_by_phone(phone.as_str())
        .await?
        .ok_or(AuthError::PhoneNotRegistered)?;
    customers.touch_last_login(customer.id).await?;

    let data = login_payload(&state, &customer)?;
    Ok(ApiResponse::ok("Login successful", data))
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<ApiResponse>> {
    let phone = normalize_phone(&payload.phone)?;
    let customers = CustomerRepository::new(state.pool().clone());
    let customer = customers
        .find_by_phone(phone.as_str())
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let valid = customer
        .password_hash
        .as_deref()
        .is_some_and(|hash| auth::verify_password(&payload.password, hash));
    if !valid {
        return Err(AuthError::InvalidCredentials.into());
    }
    customers.touch_last_login(customer.id).await?;

    let data = login_payload(&state, &customer)?;
    Ok(ApiResponse::ok("Login successful", data))
}

async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegistrationRequest>,
) -> Result<Json<ApiResponse>> {
    let phone = normalize_phone(&payload.phone)?;
    let email = payload
        .email
        .as_deref()
        .map(Email::parse)
        .transpose()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let customers = CustomerRepository::new(state.pool().clone());
    if customers.find_by_phone(phone.as_str()).await?.is_some() {
        return Err(AuthError::PhoneAlreadyRegistered.into());
    }

    let customer = customers
        .create(
            &generate_reference("CUST"),
            payload.customer_type.unwrap_or_default(),
            payload.name.trim(),
            phone.as_str(),
            email.as_ref().map(Email::as_str),
            payload.city.as_deref(),
        )
        .await?;

    let code = generate_otp_code();
    let expires_at = OtpRepository::new(state.pool().clone())
        .issue(phone.as_str(), &code, OtpPurpose::Registration)
        .await?;
    Ok(ApiResponse::ok(
        "Registration started",
        json!({
            "customer_id": customer.id,
            "otp": code,
            "expires_at": expires_at,
        }),
    ))
}

async fn verify_registration(
    State(state): State<AppState>,
    Json(payload): Json<OtpPayload>,
) -> Result<Json<ApiResponse>> {
    let phone = normalize_phone(&payload.phone)?;
    let consumed = OtpRepository::new(state.pool().clone())
        .consume(phone.as_str(), &payload.otp, OtpPurpose::Registration)
        .await?;
    if !consumed {
        return Err(AuthError::InvalidOtp.into());
    }

    let customers = CustomerRepository::new(state.pool().clone());
    let customer = customers
        .find_by_phone(phone.as_str())
        .await?
        .ok_or(AuthError::PhoneNotRegistered)?;
    customers.mark_verified(customer.id).await?;
    customers.touch_last_login(customer.id).await?;

    let customer = customers.find_by_id(customer.id).await?;
    let data = login_payload(&state, &customer)?;
    Ok(ApiResponse::ok("Registration verified", data))
}

async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<PhonePayload>,
) -> Result<Json<ApiResponse>> {
    let phone = normalize_phone(&payload.phone)?;
    let customers = CustomerRepository::new(state.pool().clone());
    if customers.find_by_phone(phone.as_str()).await?.is_none() {
        return Err(AuthError::PhoneNotRegistered.into());
    }

    let code = generate_otp_code();
    let expires_at = OtpRepository::new(state.pool().clone())
        .issue(phone.as_str(), &code, OtpPurpose::PasswordReset)
        .await?;
    Ok(ApiResponse::ok(
        "Password reset OTP sent",
        json!({"otp": code, "expires_at": expires_at}),
    ))
}

async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPayload>,
) -> Result<Json<ApiResponse>> {
    let phone = normalize_phone(&payload.phone)?;
    validate_password_strength(&payload.new_password)?;

    let consumed = OtpRepository::new(state.pool().clone())
        .consume(phone.as_str(), &payload.otp, OtpPurpose::PasswordReset)
        .await?;
    if !consumed {
        return Err(AuthError::InvalidOtp.into());
    }

    let customers = CustomerRepository::new(state.pool().clone());
    let customer = customers
        .find_by_phone(phone.as_str())
        .await?
        .ok_or(AuthError::PhoneNotRegistered)?;
    let hash = hash_password(&payload.new_password)?;
    customers.set_password_hash(customer.id, &hash).await?;
    Ok(ApiResponse::ok_empty("Password reset"))
}

/// Tokens are stateless, so logout only acknowledges; the app discards the
/// token.
async fn logout(_customer: CurrentCustomer) -> Json<ApiResponse> {
    ApiResponse::ok_empty("Logged out")
}
