//! Customer enquiries.

use chrono::{DateTime, Utc};
use ostrich_core::{CustomerId, EnquiryId, ProductId};
use serde::{Deserialize, Serialize};

/// One row of the `enquiries` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Enquiry {
    pub id: EnquiryId,
    #[serde(skip)]
    pub customer_id: CustomerId,
    pub enquiry_number: String,
    pub message: String,
    pub product_id: Option<ProductId>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting a new enquiry.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEnquiry {
    pub message: String,
    #[serde(default)]
    pub product_id: Option<ProductId>,
}
