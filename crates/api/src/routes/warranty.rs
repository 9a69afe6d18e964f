//! Warranty overview, split into active and expired coverage.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::json;

use crate::db::ProductRepository;
use crate::error::Result;
use crate::middleware::CurrentCustomer;
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(overview))
}

async fn overview(
    State(state): State<AppState>,
    current: CurrentCustomer,
) -> Result<Json<ApiResponse>> {
    let now = Utc::now();
    let owned = ProductRepository::new(state.pool().clone())
        .owned_by_customer(current.id)
        .await?;
    let (active, expired): (Vec<_>, Vec<_>) =
        owned.into_iter().partition(|p| p.warranty_active(now));
    Ok(ApiResponse::ok(
        "Warranty overview",
        json!({"active": active, "expired": expired}),
    ))
}
