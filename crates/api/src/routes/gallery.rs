//! Public product image gallery. No authentication required.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::db::ProductRepository;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(gallery))
}

async fn gallery(State(state): State<AppState>) -> Result<Json<ApiResponse>> {
    let images = ProductRepository::new(state.pool().clone())
        .gallery()
        .await?;
    Ok(ApiResponse::ok("Gallery images", images))
}
