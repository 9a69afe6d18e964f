//! Notification feed endpoints.

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use ostrich_core::NotificationId;
use serde_json::json;

use crate::db::NotificationRepository;
use crate::error::Result;
use crate::middleware::CurrentCustomer;
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/unread-count", get(unread_count))
        .route("/{id}/read", put(mark_read))
}

async fn list(
    State(state): State<AppState>,
    current: CurrentCustomer,
) -> Result<Json<ApiResponse>> {
    let notifications = NotificationRepository::new(state.pool().clone())
        .list_for_customer(current.id)
        .await?;
    Ok(ApiResponse::ok("Notifications", notifications))
}

async fn mark_read(
    State(state): State<AppState>,
    current: CurrentCustomer,
    Path(id): Path<NotificationId>,
) -> Result<Json<ApiResponse>> {
    NotificationRepository::new(state.pool().clone())
        .mark_read(current.id, id)
        .await?;
    Ok(ApiResponse::ok_empty("Notification marked read"))
}

async fn unread_count(
    State(state): State<AppState>,
    current: CurrentCustomer,
) -> Result<Json<ApiResponse>> {
    let count = NotificationRepository::new(state.pool().clone())
        .unread_count(current.id)
        .await?;
    Ok(ApiResponse::ok("Unread count", json!({"count": count})))
}
