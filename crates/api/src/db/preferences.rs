//! Customer preference storage.
//!
//! Exactly one `customer_preferences` row per customer, created lazily on
//! first read or first write. Creation is guarded by the UNIQUE constraint
//! on `customer_id`, so concurrent first accesses cannot produce duplicates.

use ostrich_core::CustomerId;
use sqlx::MySqlPool;

use super::RepositoryError;
use crate::models::preference::{PreferenceRecord, PreferencesUpdate};

/// Repository for customer preference records.
#[derive(Debug, Clone)]
pub struct PreferenceRepository {
    pool: MySqlPool,
}

impl PreferenceRepository {
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Fetch a customer's preferences, creating the row with defaults on
    /// first access.
    ///
    /// Always succeeds for a valid customer; a "not found" outcome does not
    /// exist. Calling this twice creates no second row.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn get_or_create(
        &self,
        customer_id: CustomerId,
    ) -> Result<PreferenceRecord, RepositoryError> {
        self.ensure_row(customer_id).await?;
        self.fetch(customer_id).await
    }

    /// Apply a partial update, creating the row with defaults first if this
    /// customer has never touched their preferences.
    ///
    /// Fields left unset in `update` keep their stored value. The merge runs
    /// in a single UPDATE statement, so two concurrent updates to different
    /// fields both survive.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn update(
        &self,
        customer_id: CustomerId,
        update: &PreferencesUpdate,
    ) -> Result<PreferenceRecord, RepositoryError> {
        self.ensure_row(customer_id).await?;

        if !update.is_empty() {
            sqlx::query(
                r"
                UPDATE customer_preferences
                SET email_notifications = COALESCE(?, email_notifications),
                    sms_notifications = COALESCE(?, sms_notifications),
                    push_notifications = COALESCE(?, push_notifications),
                    location_sharing = COALESCE(?, location_sharing),
                    updated_at = NOW(6)
                WHERE customer_id = ?
                ",
            )
            .bind(update.email_notifications)
            .bind(update.sms_notifications)
            .bind(update.push_notifications)
            .bind(update.location_sharing)
            .bind(customer_id)
            .execute(&self.pool)
            .await?;
        }

        self.fetch(customer_id).await
    }

    /// Insert the default row if missing. The no-op assignment in the upsert
    /// makes a lost race harmless.
    async fn ensure_row(&self, customer_id: CustomerId) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO customer_preferences (customer_id)
            VALUES (?)
            ON DUPLICATE KEY UPDATE customer_id = customer_id
            ",
        )
        .bind(customer_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn fetch(&self, customer_id: CustomerId) -> Result<PreferenceRecord, RepositoryError> {
        let record = sqlx::query_as::<_, PreferenceRecord>(
            r"
            SELECT id, customer_id, email_notifications, sms_notifications,
                   push_notifications, location_sharing, created_at, updated_at
            FROM customer_preferences
            WHERE customer_id = ?
            ",
        )
        .bind(customer_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }
}
