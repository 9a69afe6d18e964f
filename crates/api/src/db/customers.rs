//! Customer account storage.

use chrono::Utc;
use ostrich_core::{CustomerId, CustomerType};
use sqlx::MySqlPool;

use super::RepositoryError;
use crate::models::customer::{Customer, ProfileUpdate};

const CUSTOMER_COLUMNS: &str = r"
    id, customer_code, customer_type, individual_name, company_name,
    contact_person, phone, email, password_hash, address, city, state,
    pin_code, has_mobile_access, is_verified, registration_source,
    last_login, created_at, updated_at
";

/// Repository for customer accounts.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: MySqlPool,
}

impl CustomerRepository {
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Look up a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no such customer exists.
    pub async fn find_by_id(&self, id: CustomerId) -> Result<Customer, RepositoryError> {
        let query = format!("SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = ?");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    /// Look up a customer by normalized phone number.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn find_by_phone(&self, phone: &str) -> Result<Option<Customer>, RepositoryError> {
        let query = format!("SELECT {CUSTOMER_COLUMNS} FROM customers WHERE phone = ?");
        Ok(sqlx::query_as::<_, Customer>(&query)
            .bind(phone)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// Create a customer registered through the mobile app.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] if the phone number is already
    /// registered.
    pub async fn create(
        &self,
        customer_code: &str,
        customer_type: CustomerType,
        name: &str,
        phone: &str,
        email: Option<&str>,
        city: Option<&str>,
    ) -> Result<Customer, RepositoryError> {
        let (individual_name, company_name) = match customer_type {
            CustomerType::B2c => (Some(name), None),
            CustomerType::B2b | CustomerType::B2g => (None, Some(name)),
        };
        let result = sqlx::query(
            r"
            INSERT INTO customers
                (customer_code, customer_type, individual_name, company_name,
                 phone, email, city, has_mobile_access, registration_source)
            VALUES (?, ?, ?, ?, ?, ?, ?, TRUE, 'mobile_app')
            ",
        )
        .bind(customer_code)
        .bind(customer_type)
        .bind(individual_name)
        .bind(company_name)
        .bind(phone)
        .bind(email)
        .bind(city)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation()) {
                RepositoryError::Conflict(format!("phone {phone} already registered"))
            } else {
                e.into()
            }
        })?;

        #[allow(clippy::cast_possible_wrap)]
        self.find_by_id(CustomerId::new(result.last_insert_id() as i64))
            .await
    }

    /// Store a new password hash for the customer.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no such customer exists.
    pub async fn set_password_hash(
        &self,
        id: CustomerId,
        password_hash: &str,
    ) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("UPDATE customers SET password_hash = ?, updated_at = NOW(6) WHERE id = ?")
                .bind(password_hash)
                .bind(id)
                .execute(&self.pool)
                .await?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Mark the customer as verified after OTP registration confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn mark_verified(&self, id: CustomerId) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE customers SET is_verified = TRUE, updated_at = NOW(6) WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Record a successful login.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn touch_last_login(&self, id: CustomerId) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE customers SET last_login = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Apply a partial profile update. Unset fields keep their stored value.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no such customer exists.
    pub async fn update_profile(
        &self,
        id: CustomerId,
        update: &ProfileUpdate,
    ) -> Result<Customer, RepositoryError> {
        sqlx::query(
            r"
            UPDATE customers
            SET individual_name = COALESCE(?, individual_name),
                company_name = COALESCE(?, company_name),
                contact_person = COALESCE(?, contact_person),
                email = COALESCE(?, email),
                address = COALESCE(?, address),
                city = COALESCE(?, city),
                state = COALESCE(?, state),
                pin_code = COALESCE(?, pin_code),
                updated_at = NOW(6)
            WHERE id = ?
            ",
        )
        .bind(update.individual_name.as_deref())
        .bind(update.company_name.as_deref())
        .bind(update.contact_person.as_deref())
        .bind(update.email.as_deref())
        .bind(update.address.as_deref())
        .bind(update.city.as_deref())
        .bind(update.state.as_deref())
        .bind(update.pin_code.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id).await
    }
}
