//! Per-customer notification feed.

use chrono::{DateTime, Utc};
use ostrich_core::{CustomerId, NotificationId};
use serde::Serialize;

/// One row of the `notifications` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(skip)]
    pub customer_id: CustomerId,
    pub title: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
