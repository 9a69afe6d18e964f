//! Sale and purchase history queries.

use ostrich_core::{CustomerId, SaleId};
use sqlx::MySqlPool;

use super::RepositoryError;
use crate::models::order::{Sale, SaleItem};
use crate::models::product::Product;

/// Repository for sales and their line items.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: MySqlPool,
}

impl OrderRepository {
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// A customer's sales, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn list_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Sale>, RepositoryError> {
        Ok(sqlx::query_as::<_, Sale>(
            r"
            SELECT id, customer_id, sale_number, sale_date, total_amount, status
            FROM sales
            WHERE customer_id = ?
            ORDER BY sale_date DESC
            ",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?)
    }

    /// One sale, scoped to its owner.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the sale does not exist or
    /// belongs to another customer.
    pub async fn find_for_customer(
        &self,
        customer_id: CustomerId,
        sale_id: SaleId,
    ) -> Result<Sale, RepositoryError> {
        sqlx::query_as::<_, Sale>(
            r"
            SELECT id, customer_id, sale_number, sale_date, total_amount, status
            FROM sales
            WHERE id = ? AND customer_id = ?
            ",
        )
        .bind(sale_id)
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// Line items of a sale, with product names.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn items(&self, sale_id: SaleId) -> Result<Vec<SaleItem>, RepositoryError> {
        Ok(sqlx::query_as::<_, SaleItem>(
            r"
            SELECT si.id, si.sale_id, si.product_id, p.name AS product_name,
                   si.quantity, si.unit_price, si.serial_number,
                   si.warranty_start_date, si.warranty_end_date
            FROM sale_items si
            JOIN products p ON p.id = si.product_id
            WHERE si.sale_id = ?
            ORDER BY si.id
            ",
        )
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Active products in the categories the customer has bought from,
    /// excluding anything they already own.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn related_purchases(
        &self,
        customer_id: CustomerId,
        limit: u32,
    ) -> Result<Vec<Product>, RepositoryError> {
        Ok(sqlx::query_as::<_, Product>(
            r"
            SELECT DISTINCT p.id, p.name, p.description, p.model_number, p.price,
                   p.category_id, c.name AS category_name, p.is_active, p.created_at
            FROM products p
            LEFT JOIN product_categories c ON c.id = p.category_id
            WHERE p.is_active = TRUE
              AND p.category_id IN (
                  SELECT DISTINCT p2.category_id
                  FROM sale_items si
                  JOIN sales s ON s.id = si.sale_id
                  JOIN products p2 ON p2.id = si.product_id
                  WHERE s.customer_id = ? AND p2.category_id IS NOT NULL
              )
              AND p.id NOT IN (
                  SELECT si2.product_id
                  FROM sale_items si2
                  JOIN sales s2 ON s2.id = si2.sale_id
                  WHERE s2.customer_id = ?
              )
            LIMIT ?
            ",
        )
        .bind(customer_id)
        .bind(customer_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }
}
