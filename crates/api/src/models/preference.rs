//! Customer notification and location preferences.

use chrono::{DateTime, Utc};
use ostrich_core::{CustomerId, PreferenceId};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// The set of preference fields a client may toggle.
///
/// Also the exhaustive whitelist for update payload validation; any other
/// key in an update payload is rejected.
pub const PREFERENCE_FIELDS: [&str; 4] = [
    "email_notifications",
    "sms_notifications",
    "push_notifications",
    "location_sharing",
];

/// One customer's preference row.
///
/// Exactly one row exists per customer; it is created on first read or
/// first write with default toggles (all notification channels on,
/// location access off).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PreferenceRecord {
    #[serde(skip)]
    pub id: PreferenceId,
    pub customer_id: CustomerId,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub push_notifications: bool,
    pub location_sharing: bool,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validation failures for a preference update payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Payload contains a key outside the preference whitelist.
    #[error("unknown preference field: {field}")]
    UnknownField { field: String },

    /// A whitelisted key carries a non-boolean value.
    #[error("field {field} must be a boolean")]
    NotBoolean { field: String },

    /// The update payload is not a JSON object.
    #[error("expected a JSON object of preference fields")]
    NotAnObject,
}

/// A partial preference update. Fields left `None` are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesUpdate {
    pub email_notifications: Option<bool>,
    pub sms_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub location_sharing: Option<bool>,
}

impl PreferencesUpdate {
    /// Parse and validate an update payload.
    ///
    /// Every key must be one of [`PREFERENCE_FIELDS`] and every value must
    /// be a JSON boolean. An empty object is valid and yields a no-op
    /// update.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the first offending field.
    pub fn from_json(payload: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut update = Self::default();
        for (key, value) in payload {
            let slot = match key.as_str() {
                "email_notifications" => &mut update.email_notifications,
                "sms_notifications" => &mut update.sms_notifications,
                "push_notifications" => &mut update.push_notifications,
                "location_sharing" => &mut update.location_sharing,
                _ => {
                    return Err(ValidationError::UnknownField { field: key.clone() });
                }
            };
            match value {
                Value::Bool(b) => *slot = Some(*b),
                _ => {
                    return Err(ValidationError::NotBoolean { field: key.clone() });
                }
            }
        }
        Ok(update)
    }

    /// True when no field is set; such an update leaves the row untouched.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email_notifications.is_none()
            && self.sms_notifications.is_none()
            && self.push_notifications.is_none()
            && self.location_sharing.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_parse_full_update() {
        let payload = map(json!({
            "email_notifications": false,
            "sms_notifications": true,
            "push_notifications": false,
            "location_sharing": true,
        }));
        let update = PreferencesUpdate::from_json(&payload).unwrap();
        assert_eq!(update.email_notifications, Some(false));
        assert_eq!(update.sms_notifications, Some(true));
        assert_eq!(update.push_notifications, Some(false));
        assert_eq!(update.location_sharing, Some(true));
    }

    #[test]
    fn test_parse_partial_update_leaves_rest_unset() {
        let payload = map(json!({ "sms_notifications": false }));
        let update = PreferencesUpdate::from_json(&payload).unwrap();
        assert_eq!(update.sms_notifications, Some(false));
        assert_eq!(update.email_notifications, None);
        assert_eq!(update.push_notifications, None);
        assert_eq!(update.location_sharing, None);
    }

    #[test]
    fn test_empty_payload_is_noop() {
        let payload = Map::new();
        let update = PreferencesUpdate::from_json(&payload).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_unknown_field_rejected_by_name() {
        let payload = map(json!({ "email_notifications": true, "dark_mode": true }));
        let err = PreferencesUpdate::from_json(&payload).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownField {
                field: "dark_mode".to_owned()
            }
        );
    }

    #[test]
    fn test_non_boolean_value_rejected_by_name() {
        let payload = map(json!({ "push_notifications": "yes" }));
        let err = PreferencesUpdate::from_json(&payload).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotBoolean {
                field: "push_notifications".to_owned()
            }
        );
    }

    #[test]
    fn test_record_serializes_without_internal_fields() {
        let record = PreferenceRecord {
            id: PreferenceId::new(7),
            customer_id: CustomerId::new(42),
            email_notifications: true,
            sms_notifications: true,
            push_notifications: true,
            location_sharing: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("created_at").is_none());
        assert_eq!(value["customer_id"], json!(42));
        assert_eq!(value["location_sharing"], json!(false));
    }
}
