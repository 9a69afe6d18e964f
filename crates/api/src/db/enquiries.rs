//! Enquiry storage.

use ostrich_core::{CustomerId, EnquiryId, ProductId};
use sqlx::MySqlPool;

use super::RepositoryError;
use crate::models::enquiry::Enquiry;

/// Repository for customer enquiries.
#[derive(Debug, Clone)]
pub struct EnquiryRepository {
    pool: MySqlPool,
}

impl EnquiryRepository {
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// A customer's enquiries, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn list_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Enquiry>, RepositoryError> {
        Ok(sqlx::query_as::<_, Enquiry>(
            r"
            SELECT id, customer_id, enquiry_number, message, product_id, status, created_at
            FROM enquiries
            WHERE customer_id = ?
            ORDER BY created_at DESC
            ",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Record a new enquiry in NEW status.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn create(
        &self,
        customer_id: CustomerId,
        enquiry_number: &str,
        message: &str,
        product_id: Option<ProductId>,
    ) -> Result<Enquiry, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO enquiries (customer_id, enquiry_number, message, product_id, status)
            VALUES (?, ?, ?, ?, 'NEW')
            ",
        )
        .bind(customer_id)
        .bind(enquiry_number)
        .bind(message)
        .bind(product_id)
        .execute(&self.pool)
        .await?;

        #[allow(clippy::cast_possible_wrap)]
        let id = EnquiryId::new(result.last_insert_id() as i64);
        sqlx::query_as::<_, Enquiry>(
            r"
            SELECT id, customer_id, enquiry_number, message, product_id, status, created_at
            FROM enquiries
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(Into::into)
    }
}
