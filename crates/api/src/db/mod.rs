//! Database operations for the Ostrich MySQL store.
//!
//! # Tables
//!
//! - `customers` - Customer accounts and credentials
//! - `customer_preferences` - Per-customer notification/location toggles
//! - `product_categories` / `products` / `product_images` - Catalog
//! - `sales` / `sale_items` - Orders and warranty-bearing line items
//! - `service_tickets` - Service requests
//! - `notifications` - Per-customer notification feed
//! - `enquiries` - Customer enquiries
//! - `service_centers` - Service center directory
//! - `otp_codes` - Short-lived OTP codes for login/registration/reset
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p ostrich-cli -- migrate
//! ```

pub mod customers;
pub mod enquiries;
pub mod notifications;
pub mod orders;
pub mod otp;
pub mod preferences;
pub mod products;
pub mod services;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use thiserror::Error;

pub use customers::CustomerRepository;
pub use enquiries::EnquiryRepository;
pub use notifications::NotificationRepository;
pub use orders::OrderRepository;
pub use otp::OtpRepository;
pub use preferences::PreferenceRepository;
pub use products::ProductRepository;
pub use services::ServiceRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// Database unreachable or the operation timed out. Transient; the
    /// caller may retry.
    #[error("storage unavailable: {0}")]
    Unavailable(sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique phone).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Self::Unavailable(e),
            other => Self::Database(other),
        }
    }
}

/// Create a MySQL connection pool with sensible defaults.
///
/// The acquire timeout is the bounded-timeout policy for every storage call:
/// when the database is unreachable, requests fail within 10 seconds with
/// [`RepositoryError::Unavailable`] instead of hanging.
///
/// # Arguments
///
/// * `database_url` - MySQL connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_classified_as_unavailable() {
        let err: RepositoryError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, RepositoryError::Unavailable(_)));
    }

    #[test]
    fn test_row_not_found_classified_as_database() {
        let err: RepositoryError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, RepositoryError::Database(_)));
    }
}
