//! Customer accounts.

use chrono::{DateTime, Utc};
use ostrich_core::{CustomerId, CustomerType};
use serde::Serialize;
use serde_json::{Value, json};

/// One row of the `customers` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Customer {
    pub id: CustomerId,
    pub customer_code: String,
    pub customer_type: CustomerType,
    pub individual_name: Option<String>,
    pub company_name: Option<String>,
    pub contact_person: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
    pub has_mobile_access: bool,
    pub is_verified: bool,
    pub registration_source: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// The name the app should display: the individual's name for B2C
    /// customers, the company name otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.customer_type {
            CustomerType::B2c => self.individual_name.as_deref().unwrap_or(&self.phone),
            CustomerType::B2b | CustomerType::B2g => {
                self.company_name.as_deref().unwrap_or(&self.phone)
            }
        }
    }

    /// True when the customer has completed password setup and can log in
    /// with credentials rather than OTP alone.
    #[must_use]
    pub const fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Serialize the fields the mobile app is allowed to see.
    #[must_use]
    pub fn to_profile(&self) -> Value {
        json!({
            "id": self.id,
            "customer_code": self.customer_code,
            "customer_type": self.customer_type,
            "name": self.display_name(),
            "individual_name": self.individual_name,
            "company_name": self.company_name,
            "contact_person": self.contact_person,
            "phone": self.phone,
            "email": self.email,
            "address": self.address,
            "city": self.city,
            "state": self.state,
            "pin_code": self.pin_code,
            "is_verified": self.is_verified,
            "has_password": self.has_password(),
        })
    }
}

/// Profile fields a customer may update about themselves.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ProfileUpdate {
    pub individual_name: Option<String>,
    pub company_name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
}

/// Registration payload for a new mobile customer.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RegistrationRequest {
    pub phone: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub customer_type: Option<CustomerType>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Summary serialization used in aggregate payloads.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub customer_type: CustomerType,
    pub is_verified: bool,
}

impl From<&Customer> for CustomerSummary {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.display_name().to_owned(),
            phone: customer.phone.clone(),
            customer_type: customer.customer_type,
            is_verified: customer.is_verified,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn customer(customer_type: CustomerType) -> Customer {
        Customer {
            id: CustomerId::new(1),
            customer_code: "CUST-0001".to_owned(),
            customer_type,
            individual_name: Some("Asha Rao".to_owned()),
            company_name: Some("Rao Traders".to_owned()),
            contact_person: None,
            phone: "+919812345678".to_owned(),
            email: None,
            password_hash: None,
            address: None,
            city: None,
            state: None,
            pin_code: None,
            has_mobile_access: true,
            is_verified: true,
            registration_source: Some("mobile_app".to_owned()),
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_display_name_prefers_individual_for_b2c() {
        assert_eq!(customer(CustomerType::B2c).display_name(), "Asha Rao");
    }

    #[test]
    fn test_display_name_prefers_company_for_b2b() {
        assert_eq!(customer(CustomerType::B2b).display_name(), "Rao Traders");
    }

    #[test]
    fn test_profile_hides_password_hash() {
        let profile = customer(CustomerType::B2c).to_profile();
        assert!(profile.get("password_hash").is_none());
        assert_eq!(profile["has_password"], json!(false));
    }
}
