//! Home-screen aggregate.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::db::{CustomerRepository, NotificationRepository, ProductRepository, ServiceRepository};
use crate::error::Result;
use crate::middleware::CurrentCustomer;
use crate::models::customer::CustomerSummary;
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

const RECENT_TICKETS: u32 = 5;

async fn dashboard(
    State(state): State<AppState>,
    current: CurrentCustomer,
) -> Result<Json<ApiResponse>> {
    let pool = state.pool().clone();
    let customer = CustomerRepository::new(pool.clone())
        .find_by_id(current.id)
        .await?;
    let product_count = ProductRepository::new(pool.clone())
        .owned_count(current.id)
        .await?;
    let services = ServiceRepository::new(pool.clone());
    let active_services = services.active_count(current.id).await?;
    let recent_services = services.recent(current.id, RECENT_TICKETS).await?;
    let unread_notifications = NotificationRepository::new(pool)
        .unread_count(current.id)
        .await?;

    Ok(ApiResponse::ok(
        "Dashboard",
        json!({
            "customer": CustomerSummary::from(&customer),
            "product_count": product_count,
            "active_services": active_services,
            "recent_services": recent_services,
            "unread_notifications": unread_notifications,
        }),
    ))
}
