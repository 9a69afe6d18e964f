//! Sales and sale line items.

use chrono::{DateTime, Utc};
use ostrich_core::{CustomerId, ProductId, SaleId, SaleItemId};
use rust_decimal::Decimal;
use serde::Serialize;

/// One row of the `sales` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Sale {
    pub id: SaleId,
    #[serde(skip)]
    pub customer_id: CustomerId,
    pub sale_number: String,
    pub sale_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub status: String,
}

/// One row of the `sale_items` table, joined with the product name.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SaleItem {
    pub id: SaleItemId,
    #[serde(skip)]
    pub sale_id: SaleId,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub serial_number: Option<String>,
    pub warranty_start_date: Option<DateTime<Utc>>,
    pub warranty_end_date: Option<DateTime<Utc>>,
}
