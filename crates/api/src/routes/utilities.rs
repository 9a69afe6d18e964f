//! Utility endpoints: per-customer settings, plus acknowledge-only stubs
//! for WhatsApp sends and file uploads.
//!
//! The settings pair is backed by the preference store. A customer who has
//! never touched their settings still gets a record: the first GET or PUT
//! creates the row with defaults (all notification channels on, location
//! sharing off).

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::db::PreferenceRepository;
use crate::error::Result;
use crate::middleware::CurrentCustomer;
use crate::models::preference::{PreferenceRecord, PreferencesUpdate, ValidationError};
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/settings", get(get_settings).put(update_settings))
        .route("/whatsapp/send", post(whatsapp_send))
        .route("/uploads", post(uploads))
}

fn settings_payload(record: &PreferenceRecord, include_updated_at: bool) -> Value {
    let mut data = json!({
        "email_notifications": record.email_notifications,
        "sms_notifications": record.sms_notifications,
        "push_notifications": record.push_notifications,
        "location_sharing": record.location_sharing,
    });
    if include_updated_at {
        if let Some(obj) = data.as_object_mut() {
            obj.insert("updated_at".into(), json!(record.updated_at));
        }
    }
    data
}

async fn get_settings(
    State(state): State<AppState>,
    current: CurrentCustomer,
) -> Result<Json<ApiResponse>> {
    let record = PreferenceRepository::new(state.pool().clone())
        .get_or_create(current.id)
        .await?;
    Ok(ApiResponse::ok("Settings", settings_payload(&record, false)))
}

async fn update_settings(
    State(state): State<AppState>,
    current: CurrentCustomer,
    Json(payload): Json<Value>,
) -> Result<Json<ApiResponse>> {
    let fields = payload.as_object().ok_or(ValidationError::NotAnObject)?;
    let update = PreferencesUpdate::from_json(fields)?;
    let record = PreferenceRepository::new(state.pool().clone())
        .update(current.id, &update)
        .await?;
    Ok(ApiResponse::ok(
        "Settings updated",
        settings_payload(&record, true),
    ))
}

/// Acknowledge-only: the WhatsApp gateway is an external collaborator.
async fn whatsapp_send(_current: CurrentCustomer, Json(_payload): Json<Value>) -> Json<ApiResponse> {
    ApiResponse::ok_empty("Message queued")
}

/// Acknowledge-only: uploads are handled by the media service.
async fn uploads(_current: CurrentCustomer) -> Json<ApiResponse> {
    ApiResponse::ok_empty("Upload received")
}
