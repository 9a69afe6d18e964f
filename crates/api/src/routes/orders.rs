//! Order history endpoints.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use ostrich_core::SaleId;
use serde_json::json;

use crate::db::OrderRepository;
use crate::error::Result;
use crate::middleware::CurrentCustomer;
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/related-purchases", get(related_purchases))
        .route("/{id}", get(detail))
}

const RELATED_LIMIT: u32 = 10;

async fn list(
    State(state): State<AppState>,
    current: CurrentCustomer,
) -> Result<Json<ApiResponse>> {
    let sales = OrderRepository::new(state.pool().clone())
        .list_for_customer(current.id)
        .await?;
    Ok(ApiResponse::ok("Orders", sales))
}

async fn detail(
    State(state): State<AppState>,
    current: CurrentCustomer,
    Path(id): Path<SaleId>,
) -> Result<Json<ApiResponse>> {
    let orders = OrderRepository::new(state.pool().clone());
    let sale = orders.find_for_customer(current.id, id).await?;
    let items = orders.items(sale.id).await?;
    Ok(ApiResponse::ok(
        "Order",
        json!({"sale": sale, "items": items}),
    ))
}

/// Suggestions from the categories the customer has bought from, minus
/// products they already own.
async fn related_purchases(
    State(state): State<AppState>,
    current: CurrentCustomer,
) -> Result<Json<ApiResponse>> {
    let products = OrderRepository::new(state.pool().clone())
        .related_purchases(current.id, RELATED_LIMIT)
        .await?;
    Ok(ApiResponse::ok("Related purchases", products))
}
