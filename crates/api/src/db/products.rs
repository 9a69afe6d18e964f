//! Catalog and owned-product queries.

use ostrich_core::{CategoryId, CustomerId, ProductId};
use sqlx::MySqlPool;

use super::RepositoryError;
use crate::models::product::{GalleryImage, OwnedProduct, Product, ProductCategory, ProductImage};

const PRODUCT_COLUMNS: &str = r"
    p.id, p.name, p.description, p.model_number, p.price, p.category_id,
    c.name AS category_name, p.is_active, p.created_at
";

/// Repository for catalog products, categories, and images.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: MySqlPool,
}

impl ProductRepository {
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Fetch one active product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no such product exists.
    pub async fn find_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let query = format!(
            r"
            SELECT {PRODUCT_COLUMNS}
            FROM products p
            LEFT JOIN product_categories c ON c.id = p.category_id
            WHERE p.id = ? AND p.is_active = TRUE
            "
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    /// The public catalog, optionally narrowed by category and a free-text
    /// search over name and model number.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn catalog(
        &self,
        category_id: Option<CategoryId>,
        search: Option<&str>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut query = format!(
            r"
            SELECT {PRODUCT_COLUMNS}
            FROM products p
            LEFT JOIN product_categories c ON c.id = p.category_id
            WHERE p.is_active = TRUE
            "
        );
        if category_id.is_some() {
            query.push_str(" AND p.category_id = ?");
        }
        if search.is_some() {
            query.push_str(" AND (p.name LIKE ? OR p.model_number LIKE ?)");
        }
        query.push_str(" ORDER BY p.name");

        let mut q = sqlx::query_as::<_, Product>(&query);
        if let Some(category) = category_id {
            q = q.bind(category);
        }
        if let Some(term) = search {
            let pattern = format!("%{term}%");
            q = q.bind(pattern.clone()).bind(pattern);
        }
        Ok(q.fetch_all(&self.pool).await?)
    }

    /// Active categories in display order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn categories(&self) -> Result<Vec<ProductCategory>, RepositoryError> {
        Ok(sqlx::query_as::<_, ProductCategory>(
            r"
            SELECT id, name, display_order, is_active
            FROM product_categories
            WHERE is_active = TRUE
            ORDER BY display_order, name
            ",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    /// Active images for a product, product shots before gallery shots.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn images(&self, product_id: ProductId) -> Result<Vec<ProductImage>, RepositoryError> {
        Ok(sqlx::query_as::<_, ProductImage>(
            r"
            SELECT id, product_id, url, image_type, display_order
            FROM product_images
            WHERE product_id = ? AND is_active = TRUE
            ORDER BY image_type, display_order
            ",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Every active gallery image across the catalog, with product context.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn gallery(&self) -> Result<Vec<GalleryImage>, RepositoryError> {
        Ok(sqlx::query_as::<_, GalleryImage>(
            r"
            SELECT pi.id, pi.product_id, pi.url, pi.display_order,
                   p.name AS product_name, c.name AS category_name
            FROM product_images pi
            LEFT JOIN products p ON p.id = pi.product_id
            LEFT JOIN product_categories c ON c.id = p.category_id
            WHERE pi.is_active = TRUE AND pi.image_type = 'gallery'
            ORDER BY pi.display_order
            ",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    /// Products the customer has purchased, with per-unit warranty windows.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn owned_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<OwnedProduct>, RepositoryError> {
        Ok(sqlx::query_as::<_, OwnedProduct>(
            r"
            SELECT p.id AS product_id, p.name, p.model_number,
                   si.serial_number, s.sale_date AS purchase_date,
                   si.warranty_start_date, si.warranty_end_date
            FROM sale_items si
            JOIN sales s ON s.id = si.sale_id
            JOIN products p ON p.id = si.product_id
            WHERE s.customer_id = ?
            ORDER BY s.sale_date DESC
            ",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?)
    }

    /// The most frequently sold active products. Never-sold products still
    /// appear, ranked by recency behind everything with sales.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn trending(&self, limit: u32) -> Result<Vec<Product>, RepositoryError> {
        let query = format!(
            r"
            SELECT {PRODUCT_COLUMNS}
            FROM products p
            LEFT JOIN product_categories c ON c.id = p.category_id
            LEFT JOIN sale_items si ON si.product_id = p.id
            WHERE p.is_active = TRUE
            GROUP BY p.id
            ORDER BY COUNT(si.id) DESC, p.created_at DESC
            LIMIT ?
            "
        );
        Ok(sqlx::query_as::<_, Product>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Count of distinct products the customer owns.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn owned_count(&self, customer_id: CustomerId) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as(
            r"
            SELECT COUNT(DISTINCT si.product_id)
            FROM sale_items si
            JOIN sales s ON s.id = si.sale_id
            WHERE s.customer_id = ?
            ",
        )
        .bind(customer_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
