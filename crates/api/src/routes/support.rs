//! Static support content: FAQ and contact details. Public.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::response::ApiResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/faq", get(faq))
        .route("/contact", get(contact))
}

async fn faq() -> Json<ApiResponse> {
    ApiResponse::ok(
        "FAQ",
        json!([
            {
                "question": "How do I register my product?",
                "answer": "Products purchased through an authorized dealer are registered automatically. They appear under My Products after your first login."
            },
            {
                "question": "How do I check my warranty status?",
                "answer": "Open the Warranty tab. Active and expired coverage is listed per product with the end date."
            },
            {
                "question": "How do I book a service visit?",
                "answer": "Open Services and tap New Request. A technician will be assigned and you can track the ticket status in the app."
            },
            {
                "question": "I forgot my password.",
                "answer": "Use Forgot Password on the login screen. You will receive an OTP to reset it."
            }
        ]),
    )
}

async fn contact() -> Json<ApiResponse> {
    ApiResponse::ok(
        "Contact",
        json!({
            "phone": "+91-1800-266-7799",
            "email": "support@ostrich.com",
            "hours": "Mon-Sat 09:00-18:00 IST",
        }),
    )
}
