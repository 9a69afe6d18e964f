//! Service banner and health probes.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::error::Result;
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .route("/health/ready", get(ready))
}

async fn banner() -> Json<ApiResponse> {
    ApiResponse::ok(
        "Ostrich Customer Mobile API",
        json!({
            "service": "ostrich-api",
            "version": env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// Liveness probe. Always succeeds while the process is up.
async fn health() -> Json<ApiResponse> {
    ApiResponse::ok_empty("OK")
}

/// Readiness probe. Fails with 503 when the database is unreachable.
async fn ready(State(state): State<AppState>) -> Result<Json<ApiResponse>> {
    sqlx::query("SELECT 1")
        .execute(state.pool())
        .await
        .map_err(crate::db::RepositoryError::from)?;
    Ok(ApiResponse::ok_empty("Ready"))
}
