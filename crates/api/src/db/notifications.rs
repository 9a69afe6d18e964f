//! Notification feed storage.

use ostrich_core::{CustomerId, NotificationId};
use sqlx::MySqlPool;

use super::RepositoryError;
use crate::models::notification::Notification;

/// Repository for the per-customer notification feed.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: MySqlPool,
}

impl NotificationRepository {
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// A customer's notifications, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn list_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Notification>, RepositoryError> {
        Ok(sqlx::query_as::<_, Notification>(
            r"
            SELECT id, customer_id, title, body, is_read, created_at
            FROM notifications
            WHERE customer_id = ?
            ORDER BY created_at DESC
            ",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Mark one notification read, scoped to its owner.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the notification does not
    /// exist or belongs to another customer.
    pub async fn mark_read(
        &self,
        customer_id: CustomerId,
        notification_id: NotificationId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE id = ? AND customer_id = ?",
        )
        .bind(notification_id)
        .bind(customer_id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Count of unread notifications for the badge.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn unread_count(&self, customer_id: CustomerId) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM notifications WHERE customer_id = ? AND is_read = FALSE",
        )
        .bind(customer_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
