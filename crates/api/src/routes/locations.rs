//! Service center directory.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::db::ServiceRepository;
use crate::error::Result;
use crate::middleware::CurrentCustomer;
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/nearby", get(nearby))
}

#[derive(Debug, Deserialize)]
struct NearbyQuery {
    city: Option<String>,
}

async fn nearby(
    State(state): State<AppState>,
    _current: CurrentCustomer,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<ApiResponse>> {
    let centers = ServiceRepository::new(state.pool().clone())
        .centers(query.city.as_deref())
        .await?;
    Ok(ApiResponse::ok("Service centers", centers))
}
