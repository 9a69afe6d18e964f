//! Customer profile and password management.

use axum::extract::State;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::db::CustomerRepository;
use crate::error::{AppError, Result};
use crate::middleware::CurrentCustomer;
use crate::models::customer::ProfileUpdate;
use crate::response::ApiResponse;
use crate::services::auth::{
    self, AuthError, hash_password, validate_password_strength,
};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile).put(update_profile))
        .route("/set-password", post(set_password))
        .route("/change-password", put(change_password))
}

#[derive(Debug, Deserialize)]
struct SetPasswordPayload {
    password: String,
}

#[derive(Debug, Deserialize)]
struct ChangePasswordPayload {
    current_password: String,
    new_password: String,
}

async fn profile(
    State(state): State<AppState>,
    current: CurrentCustomer,
) -> Result<Json<ApiResponse>> {
    let customer = CustomerRepository::new(state.pool().clone())
        .find_by_id(current.id)
        .await?;
    Ok(ApiResponse::ok("Profile", customer.to_profile()))
}

async fn update_profile(
    State(state): State<AppState>,
    current: CurrentCustomer,
    Json(payload): Json<ProfileUpdate>,
) -> Result<Json<ApiResponse>> {
    if let Some(email) = payload.email.as_deref() {
        ostrich_core::Email::parse(email).map_err(|e| AppError::BadRequest(e.to_string()))?;
    }
    let customer = CustomerRepository::new(state.pool().clone())
        .update_profile(current.id, &payload)
        .await?;
    Ok(ApiResponse::ok("Profile updated", customer.to_profile()))
}

/// First-time password setup for OTP-only accounts.
async fn set_password(
    State(state): State<AppState>,
    current: CurrentCustomer,
    Json(payload): Json<SetPasswordPayload>,
) -> Result<Json<ApiResponse>> {
    validate_password_strength(&payload.password)?;
    let hash = hash_password(&payload.password)?;
    CustomerRepository::new(state.pool().clone())
        .set_password_hash(current.id, &hash)
        .await?;
    Ok(ApiResponse::ok_empty("Password set"))
}

async fn change_password(
    State(state): State<AppState>,
    current: CurrentCustomer,
    Json(payload): Json<ChangePasswordPayload>,
) -> Result<Json<ApiResponse>> {
    validate_password_strength(&payload.new_password)?;

    let customers = CustomerRepository::new(state.pool().clone());
    let customer = customers.find_by_id(current.id).await?;
    let valid = customer
        .password_hash
        .as_deref()
        .is_some_and(|hash| auth::verify_password(&payload.current_password, hash));
    if !valid {
        return Err(AuthError::InvalidCredentials.into());
    }

    let hash = hash_password(&payload.new_password)?;
    customers.set_password_hash(current.id, &hash).await?;
    Ok(ApiResponse::ok_empty("Password changed"))
}
