//! Service ticket and service center queries.

use ostrich_core::{CustomerId, Priority, ProductId, ServiceStatus, ServiceTicketId};
use sqlx::MySqlPool;

use super::RepositoryError;
use crate::models::service::{ServiceCenter, ServiceTicket};

const TICKET_COLUMNS: &str = r"
    t.id, t.customer_id, t.product_id, p.name AS product_name,
    t.ticket_number, t.issue_description, t.priority, t.status, t.created_at
";

/// Repository for service tickets and service centers.
#[derive(Debug, Clone)]
pub struct ServiceRepository {
    pool: MySqlPool,
}

impl ServiceRepository {
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// A customer's tickets, newest first, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn list_for_customer(
        &self,
        customer_id: CustomerId,
        status: Option<ServiceStatus>,
    ) -> Result<Vec<ServiceTicket>, RepositoryError> {
        let mut query = format!(
            r"
            SELECT {TICKET_COLUMNS}
            FROM service_tickets t
            LEFT JOIN products p ON p.id = t.product_id
            WHERE t.customer_id = ?
            "
        );
        if status.is_some() {
            query.push_str(" AND t.status = ?");
        }
        query.push_str(" ORDER BY t.created_at DESC");

        let mut q = sqlx::query_as::<_, ServiceTicket>(&query).bind(customer_id);
        if let Some(status) = status {
            q = q.bind(status);
        }
        Ok(q.fetch_all(&self.pool).await?)
    }

    /// One ticket, scoped to its owner so customers cannot read each
    /// other's tickets.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the ticket does not exist
    /// or belongs to another customer.
    pub async fn find_for_customer(
        &self,
        customer_id: CustomerId,
        ticket_id: ServiceTicketId,
    ) -> Result<ServiceTicket, RepositoryError> {
        let query = format!(
            r"
            SELECT {TICKET_COLUMNS}
            FROM service_tickets t
            LEFT JOIN products p ON p.id = t.product_id
            WHERE t.id = ? AND t.customer_id = ?
            "
        );
        sqlx::query_as::<_, ServiceTicket>(&query)
            .bind(ticket_id)
            .bind(customer_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    /// Open a new ticket in OPEN status.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn create(
        &self,
        customer_id: CustomerId,
        ticket_number: &str,
        issue_description: &str,
        product_id: Option<ProductId>,
        priority: Priority,
    ) -> Result<ServiceTicket, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO service_tickets
                (customer_id, product_id, ticket_number, issue_description, priority, status)
            VALUES (?, ?, ?, ?, ?, 'OPEN')
            ",
        )
        .bind(customer_id)
        .bind(product_id)
        .bind(ticket_number)
        .bind(issue_description)
        .bind(priority)
        .execute(&self.pool)
        .await?;

        #[allow(clippy::cast_possible_wrap)]
        self.find_for_customer(customer_id, ServiceTicketId::new(result.last_insert_id() as i64))
            .await
    }

    /// Count of a customer's tickets in active statuses.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn active_count(&self, customer_id: CustomerId) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as(
            r"
            SELECT COUNT(*)
            FROM service_tickets
            WHERE customer_id = ? AND status IN ('OPEN', 'SCHEDULED', 'IN_PROGRESS')
            ",
        )
        .bind(customer_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// The customer's most recent tickets for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn recent(
        &self,
        customer_id: CustomerId,
        limit: u32,
    ) -> Result<Vec<ServiceTicket>, RepositoryError> {
        let query = format!(
            r"
            SELECT {TICKET_COLUMNS}
            FROM service_tickets t
            LEFT JOIN products p ON p.id = t.product_id
            WHERE t.customer_id = ?
            ORDER BY t.created_at DESC
            LIMIT ?
            "
        );
        Ok(sqlx::query_as::<_, ServiceTicket>(&query)
            .bind(customer_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Active service centers, optionally narrowed to a city.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn centers(&self, city: Option<&str>) -> Result<Vec<ServiceCenter>, RepositoryError> {
        let mut query = String::from(
            r"
            SELECT id, name, address, city, phone, is_active
            FROM service_centers
            WHERE is_active = TRUE
            ",
        );
        if city.is_some() {
            query.push_str(" AND city = ?");
        }
        query.push_str(" ORDER BY name");

        let mut q = sqlx::query_as::<_, ServiceCenter>(&query);
        if let Some(city) = city {
            q = q.bind(city);
        }
        Ok(q.fetch_all(&self.pool).await?)
    }
}
