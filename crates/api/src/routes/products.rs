//! Owned products, product detail, trending, and images.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use ostrich_core::ProductId;
use serde_json::json;

use crate::db::ProductRepository;
use crate::error::Result;
use crate::middleware::CurrentCustomer;
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(owned))
        .route("/trending", get(trending))
        .route("/{id}", get(detail))
        .route("/{id}/images", get(images))
}

const TRENDING_LIMIT: u32 = 10;

/// Products the customer owns, with computed warranty state.
async fn owned(
    State(state): State<AppState>,
    current: CurrentCustomer,
) -> Result<Json<ApiResponse>> {
    let now = Utc::now();
    let products = ProductRepository::new(state.pool().clone())
        .owned_by_customer(current.id)
        .await?;
    let data: Vec<_> = products
        .iter()
        .map(|p| {
            let mut value = serde_json::to_value(p).unwrap_or(serde_json::Value::Null);
            if let Some(obj) = value.as_object_mut() {
                obj.insert("warranty_active".into(), json!(p.warranty_active(now)));
            }
            value
        })
        .collect();
    Ok(ApiResponse::ok("Owned products", data))
}

async fn detail(
    State(state): State<AppState>,
    _current: CurrentCustomer,
    Path(id): Path<ProductId>,
) -> Result<Json<ApiResponse>> {
    let product = ProductRepository::new(state.pool().clone())
        .find_by_id(id)
        .await?;
    Ok(ApiResponse::ok("Product", product))
}

async fn trending(
    State(state): State<AppState>,
    _current: CurrentCustomer,
) -> Result<Json<ApiResponse>> {
    let products = ProductRepository::new(state.pool().clone())
        .trending(TRENDING_LIMIT)
        .await?;
    Ok(ApiResponse::ok("Trending products", products))
}

async fn images(
    State(state): State<AppState>,
    _current: CurrentCustomer,
    Path(id): Path<ProductId>,
) -> Result<Json<ApiResponse>> {
    let images = ProductRepository::new(state.pool().clone())
        .images(id)
        .await?;
    Ok(ApiResponse::ok("Product images", images))
}
