//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Service ticket lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceStatus {
    #[default]
    Open,
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl ServiceStatus {
    /// Whether this status counts as an active (not yet finished) ticket.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Open | Self::Scheduled | Self::InProgress)
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Scheduled => write!(f, "SCHEDULED"),
            Self::InProgress => write!(f, "IN_PROGRESS"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

impl std::str::FromStr for ServiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OPEN" => Ok(Self::Open),
            "SCHEDULED" => Ok(Self::Scheduled),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(format!("invalid service status: {s}")),
        }
    }
}

/// Service request priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Urgent => write!(f, "URGENT"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "URGENT" => Ok(Self::Urgent),
            _ => Err(format!("invalid priority: {s}")),
        }
    }
}

/// Customer account classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    /// Individual consumer.
    #[default]
    B2c,
    /// Business account.
    B2b,
    /// Government account.
    B2g,
}

impl std::fmt::Display for CustomerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::B2c => write!(f, "b2c"),
            Self::B2b => write!(f, "b2b"),
            Self::B2g => write!(f, "b2g"),
        }
    }
}

impl std::str::FromStr for CustomerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b2c" => Ok(Self::B2c),
            "b2b" => Ok(Self::B2b),
            "b2g" => Ok(Self::B2g),
            _ => Err(format!("invalid customer type: {s}")),
        }
    }
}

/// Store an enum as its canonical string form in MySQL text columns.
#[cfg(feature = "mysql")]
macro_rules! impl_mysql_text_enum {
    ($name:ident) => {
        impl ::sqlx::Type<::sqlx::MySql> for $name {
            fn type_info() -> ::sqlx::mysql::MySqlTypeInfo {
                <str as ::sqlx::Type<::sqlx::MySql>>::type_info()
            }

            fn compatible(ty: &::sqlx::mysql::MySqlTypeInfo) -> bool {
                <str as ::sqlx::Type<::sqlx::MySql>>::compatible(ty)
            }
        }

        impl<'r> ::sqlx::Decode<'r, ::sqlx::MySql> for $name {
            fn decode(
                value: ::sqlx::mysql::MySqlValueRef<'r>,
            ) -> Result<Self, ::sqlx::error::BoxDynError> {
                let raw = <&str as ::sqlx::Decode<::sqlx::MySql>>::decode(value)?;
                raw.parse::<Self>().map_err(Into::into)
            }
        }

        impl ::sqlx::Encode<'_, ::sqlx::MySql> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut Vec<u8>,
            ) -> Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
                <String as ::sqlx::Encode<::sqlx::MySql>>::encode_by_ref(&self.to_string(), buf)
            }
        }
    };
}

#[cfg(feature = "mysql")]
impl_mysql_text_enum!(ServiceStatus);
#[cfg(feature = "mysql")]
impl_mysql_text_enum!(Priority);
#[cfg(feature = "mysql")]
impl_mysql_text_enum!(CustomerType);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_service_status_roundtrip() {
        for s in ["OPEN", "SCHEDULED", "IN_PROGRESS", "COMPLETED", "CANCELLED"] {
            let parsed: ServiceStatus = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
    }

    #[test]
    fn test_service_status_case_insensitive() {
        assert_eq!(
            "in_progress".parse::<ServiceStatus>().unwrap(),
            ServiceStatus::InProgress
        );
    }

    #[test]
    fn test_service_status_is_active() {
        assert!(ServiceStatus::Open.is_active());
        assert!(ServiceStatus::Scheduled.is_active());
        assert!(ServiceStatus::InProgress.is_active());
        assert!(!ServiceStatus::Completed.is_active());
        assert!(!ServiceStatus::Cancelled.is_active());
    }

    #[test]
    fn test_priority_default() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_customer_type_roundtrip() {
        for t in ["b2c", "b2b", "b2g"] {
            let parsed: CustomerType = t.parse().unwrap();
            assert_eq!(parsed.to_string(), t);
        }
        assert!("retail".parse::<CustomerType>().is_err());
    }
}
