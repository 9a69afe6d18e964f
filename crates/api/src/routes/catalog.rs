//! Public catalog browsing. No authentication required.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use ostrich_core::CategoryId;
use serde::Deserialize;

use crate::db::ProductRepository;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(products))
        .route("/categories", get(categories))
}

#[derive(Debug, Deserialize)]
struct CatalogQuery {
    category_id: Option<CategoryId>,
    search: Option<String>,
}

async fn products(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<ApiResponse>> {
    let products = ProductRepository::new(state.pool().clone())
        .catalog(query.category_id, query.search.as_deref())
        .await?;
    Ok(ApiResponse::ok("Catalog", products))
}

async fn categories(State(state): State<AppState>) -> Result<Json<ApiResponse>> {
    let categories = ProductRepository::new(state.pool().clone())
        .categories()
        .await?;
    Ok(ApiResponse::ok("Categories", categories))
}
