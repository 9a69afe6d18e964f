//! Catalog products, categories, and images.

use chrono::{DateTime, Utc};
use ostrich_core::{CategoryId, ProductId};
use rust_decimal::Decimal;
use serde::Serialize;

/// One row of the `product_categories` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProductCategory {
    pub id: CategoryId,
    pub name: String,
    pub display_order: i32,
    #[serde(skip)]
    pub is_active: bool,
}

/// One row of the `products` table, joined with its category name.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub model_number: Option<String>,
    pub price: Decimal,
    pub category_id: Option<CategoryId>,
    pub category_name: Option<String>,
    #[serde(skip)]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// One row of the `product_images` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProductImage {
    #[serde(skip)]
    pub id: i64,
    pub product_id: ProductId,
    pub url: String,
    pub image_type: String,
    pub display_order: i32,
}

/// A gallery image joined with its product and category names.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct GalleryImage {
    #[serde(skip)]
    pub id: i64,
    pub product_id: ProductId,
    pub url: String,
    pub display_order: i32,
    pub product_name: Option<String>,
    pub category_name: Option<String>,
}

/// A product the customer owns, derived from their sale items. Warranty
/// state is computed at read time from the warranty window.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OwnedProduct {
    pub product_id: ProductId,
    pub name: String,
    pub model_number: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: DateTime<Utc>,
    pub warranty_start_date: Option<DateTime<Utc>>,
    pub warranty_end_date: Option<DateTime<Utc>>,
}

impl OwnedProduct {
    /// True when today falls inside the warranty window.
    #[must_use]
    pub fn warranty_active(&self, now: DateTime<Utc>) -> bool {
        self.warranty_end_date.is_some_and(|end| end >= now)
            && self.warranty_start_date.is_none_or(|start| start <= now)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn owned(start_offset_days: i64, end_offset_days: i64) -> OwnedProduct {
        let now = Utc::now();
        OwnedProduct {
            product_id: ProductId::new(1),
            name: "Solar Inverter 5kW".to_owned(),
            model_number: Some("SI-5000".to_owned()),
            serial_number: Some("SN-1234".to_owned()),
            purchase_date: now - Duration::days(30),
            warranty_start_date: Some(now + Duration::days(start_offset_days)),
            warranty_end_date: Some(now + Duration::days(end_offset_days)),
        }
    }

    #[test]
    fn test_warranty_active_inside_window() {
        assert!(owned(-10, 355).warranty_active(Utc::now()));
    }

    #[test]
    fn test_warranty_expired() {
        assert!(!owned(-400, -35).warranty_active(Utc::now()));
    }

    #[test]
    fn test_warranty_missing_end_date_is_inactive() {
        let mut product = owned(-10, 355);
        product.warranty_end_date = None;
        assert!(!product.warranty_active(Utc::now()));
    }

    #[test]
    fn test_gallery_image_serialization_hides_row_id() {
        let image = GalleryImage {
            id: 42,
            product_id: ProductId::new(1),
            url: "/media/gallery/inverter-install.jpg".to_owned(),
            display_order: 1,
            product_name: Some("Solar Inverter 5kW".to_owned()),
            category_name: Some("Solar Inverters".to_owned()),
        };
        let value = serde_json::to_value(&image).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["url"], "/media/gallery/inverter-install.jpg");
        assert_eq!(value["category_name"], "Solar Inverters");
    }
}
