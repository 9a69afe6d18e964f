//! HTTP route handlers for the customer mobile API.
//!
//! Every namespace lives in its own module and mounts under `/api/v1`.
//! Handlers are thin: extract identity, call a repository, wrap the result
//! in the standard envelope.

pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod enquiries;
pub mod gallery;
pub mod health;
pub mod locations;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod profile;
pub mod sales;
pub mod services;
pub mod support;
pub mod utilities;
pub mod warranty;

use axum::Router;

use crate::state::AppState;

/// Build the full application router.
pub fn router() -> Router<AppState> {
    let api_v1 = Router::new()
        .nest("/auth", auth::router())
        .nest("/dashboard", dashboard::router())
        .nest("/products", products::router())
        .nest("/catalog", catalog::router())
        .nest("/gallery", gallery::router())
        .nest("/services", services::router())
        .nest("/orders", orders::router())
        .nest("/sales", sales::router())
        .nest("/warranty", warranty::router())
        .nest("/profile", profile::router())
        .nest("/notifications", notifications::router())
        .nest("/enquiries", enquiries::router())
        .nest("/support", support::router())
        .nest("/locations", locations::router())
        .nest("/utilities", utilities::router());

    Router::new()
        .merge(health::router())
        .nest("/api/v1", api_v1)
}
