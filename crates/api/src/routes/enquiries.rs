//! Customer enquiry endpoints.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::db::EnquiryRepository;
use crate::error::{AppError, Result};
use crate::middleware::CurrentCustomer;
use crate::models::enquiry::NewEnquiry;
use crate::response::ApiResponse;
use crate::services::auth::generate_reference;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list).post(create))
}

async fn list(
    State(state): State<AppState>,
    current: CurrentCustomer,
) -> Result<Json<ApiResponse>> {
    let enquiries = EnquiryRepository::new(state.pool().clone())
        .list_for_customer(current.id)
        .await?;
    Ok(ApiResponse::ok("Enquiries", enquiries))
}

async fn create(
    State(state): State<AppState>,
    current: CurrentCustomer,
    Json(payload): Json<NewEnquiry>,
) -> Result<Json<ApiResponse>> {
    let message = payload.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("message is required".into()));
    }
    let enquiry = EnquiryRepository::new(state.pool().clone())
        .create(
            current.id,
            &generate_reference("ENQ"),
            message,
            payload.product_id,
        )
        .await?;
    Ok(ApiResponse::ok("Enquiry submitted", enquiry))
}
