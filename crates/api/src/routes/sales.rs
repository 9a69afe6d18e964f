//! Sales history, the order list flattened to line items.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::db::OrderRepository;
use crate::error::Result;
use crate::middleware::CurrentCustomer;
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/history", get(history))
}

async fn history(
    State(state): State<AppState>,
    current: CurrentCustomer,
) -> Result<Json<ApiResponse>> {
    let orders = OrderRepository::new(state.pool().clone());
    let sales = orders.list_for_customer(current.id).await?;

    let mut history = Vec::with_capacity(sales.len());
    for sale in sales {
        let items = orders.items(sale.id).await?;
        history.push(json!({"sale": sale, "items": items}));
    }
    Ok(ApiResponse::ok("Sales history", history))
}
