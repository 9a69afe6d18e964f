//! Service ticket endpoints.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use ostrich_core::{ServiceStatus, ServiceTicketId};
use serde::Deserialize;

use crate::db::ServiceRepository;
use crate::error::{AppError, Result};
use crate::middleware::CurrentCustomer;
use crate::models::service::ServiceRequest;
use crate::response::ApiResponse;
use crate::services::auth::generate_reference;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/request", post(request))
        .route("/{id}", get(detail))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    status: Option<String>,
}

async fn list(
    State(state): State<AppState>,
    current: CurrentCustomer,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse>> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<ServiceStatus>)
        .transpose()
        .map_err(AppError::BadRequest)?;
    let tickets = ServiceRepository::new(state.pool().clone())
        .list_for_customer(current.id, status)
        .await?;
    Ok(ApiResponse::ok("Service tickets", tickets))
}

async fn request(
    State(state): State<AppState>,
    current: CurrentCustomer,
    Json(payload): Json<ServiceRequest>,
) -> Result<Json<ApiResponse>> {
    let description = payload.issue_description.trim();
    if description.is_empty() {
        return Err(AppError::BadRequest("issue_description is required".into()));
    }
    let ticket = ServiceRepository::new(state.pool().clone())
        .create(
            current.id,
            &generate_reference("SRV"),
            description,
            payload.product_id,
            payload.priority.unwrap_or_default(),
        )
        .await?;
    Ok(ApiResponse::ok("Service request created", ticket))
}

async fn detail(
    State(state): State<AppState>,
    current: CurrentCustomer,
    Path(id): Path<ServiceTicketId>,
) -> Result<Json<ApiResponse>> {
    let ticket = ServiceRepository::new(state.pool().clone())
        .find_for_customer(current.id, id)
        .await?;
    Ok(ApiResponse::ok("Service ticket", ticket))
}
