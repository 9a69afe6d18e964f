//! Service tickets and service centers.

use chrono::{DateTime, Utc};
use ostrich_core::{CustomerId, Priority, ProductId, ServiceCenterId, ServiceStatus, ServiceTicketId};
use serde::{Deserialize, Serialize};

/// One row of the `service_tickets` table, joined with the product name.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ServiceTicket {
    pub id: ServiceTicketId,
    #[serde(skip)]
    pub customer_id: CustomerId,
    pub product_id: Option<ProductId>,
    pub product_name: Option<String>,
    pub ticket_number: String,
    pub issue_description: String,
    pub priority: Priority,
    pub status: ServiceStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for opening a new service ticket.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceRequest {
    pub issue_description: String,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

/// One row of the `service_centers` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ServiceCenter {
    pub id: ServiceCenterId,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    #[serde(skip)]
    pub is_active: bool,
}
