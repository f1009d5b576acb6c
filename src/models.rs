//! Data models for the event API.
//!
//! The wire format is camelCase JSON throughout; timestamps are RFC 3339.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::validation::{parse_timestamp, ValidationErrors};

/// Opaque event identifier, assigned by the store on insert.
///
/// Parsing a path segment into an `EventId` is what distinguishes a
/// malformed id (parse failure, 400) from a missing record (404).
pub type EventId = Uuid;

/// A persisted event document.
///
/// `created_at`/`updated_at` are maintained by the store on write and are
/// never accepted from request bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The writable fields of an event, typed and ready for the store.
///
/// Produced from a request body only after schema validation and
/// whitelisting; the store never sees raw client JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFields {
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl EventFields {
    /// Build typed fields from a whitelisted body.
    ///
    /// The body is expected to have passed schema validation already, so
    /// failures here mirror the validator's messages rather than inventing
    /// a second error shape.
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = match body.get("name").and_then(Value::as_str) {
            Some(s) => s.to_owned(),
            None => {
                errors.insert("name".into(), "name is required".into());
                String::new()
            }
        };

        let start_date = Self::timestamp_field(body, "startDate", &mut errors);
        let end_date = Self::timestamp_field(body, "endDate", &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name,
            // Both unwraps are guarded by the errors check above.
            start_date: start_date.unwrap_or_default(),
            end_date: end_date.unwrap_or_default(),
        })
    }

    fn timestamp_field(
        body: &Map<String, Value>,
        field: &str,
        errors: &mut ValidationErrors,
    ) -> Option<DateTime<Utc>> {
        match body.get(field) {
            Some(value) if !value.is_null() => match parse_timestamp(value) {
                Some(ts) => Some(ts),
                None => {
                    errors.insert(field.into(), format!("{field} must be a valid date"));
                    None
                }
            },
            _ => {
                errors.insert(field.into(), format!("{field} is required"));
                None
            }
        }
    }
}

// === API Response Models ===

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Generic error response with a single message
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Validation failure response: one message per violated field
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub message: &'static str,
    pub errors: ValidationErrors,
}
