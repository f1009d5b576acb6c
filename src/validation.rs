//! Request body validation and field whitelisting.
//!
//! The schema is a static table of per-field rules evaluated against the raw
//! JSON body before any handler logic runs. Every field is checked (no
//! short-circuit) so a single response can report all violations at once.
//!
//! The whitelist filter is the sole defense against mass assignment: it
//! rebuilds the body keeping only declared writable fields and silently
//! drops everything else. It runs before every create/update write.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Per-field messages for a failed validation, keyed by field name.
///
/// BTreeMap keeps the error object deterministic across runs.
pub type ValidationErrors = BTreeMap<String, String>;

/// The JSON type a field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string
    Text,
    /// An RFC 3339 string or integer Unix epoch milliseconds
    Timestamp,
}

/// Declarative constraints for a single field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub kind: FieldKind,
    pub required: bool,
    /// Minimum length for `Text` fields
    pub min_length: Option<usize>,
}

/// A validation schema: field name to constraint set.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [(&'static str, FieldRule)],
}

/// Schema for event create/update bodies.
pub const EVENT_SCHEMA: Schema = Schema {
    fields: &[
        (
            "name",
            FieldRule {
                kind: FieldKind::Text,
                required: true,
                min_length: Some(3),
            },
        ),
        (
            "startDate",
            FieldRule {
                kind: FieldKind::Timestamp,
                required: true,
                min_length: None,
            },
        ),
        (
            "endDate",
            FieldRule {
                kind: FieldKind::Timestamp,
                required: true,
                min_length: None,
            },
        ),
    ],
};

/// Fields a client may set on an event. Everything else is dropped.
pub const EVENT_WRITABLE_FIELDS: &[&str] = &["name", "startDate", "endDate"];

/// Validate a raw JSON body against a schema.
///
/// A non-object body (array, string, ...) is treated as an empty object, so
/// every required field reports as missing.
pub fn validate(schema: &Schema, body: &Value) -> Result<(), ValidationErrors> {
    let empty = Map::new();
    let map = body.as_object().unwrap_or(&empty);

    let mut errors = ValidationErrors::new();
    for (field, rule) in schema.fields {
        if let Some(message) = check_field(field, *rule, map.get(*field)) {
            errors.insert((*field).to_owned(), message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Evaluate one rule against one (possibly absent) value.
fn check_field(field: &str, rule: FieldRule, value: Option<&Value>) -> Option<String> {
    let value = match value {
        Some(v) if !v.is_null() => v,
        _ => {
            return rule.required.then(|| format!("{field} is required"));
        }
    };

    match rule.kind {
        FieldKind::Text => {
            let Some(s) = value.as_str() else {
                return Some(format!("{field} must be a string"));
            };
            if let Some(min) = rule.min_length {
                if s.chars().count() < min {
                    return Some(format!("{field} must be at least {min} characters"));
                }
            }
            None
        }
        FieldKind::Timestamp => {
            if parse_timestamp(value).is_none() {
                return Some(format!("{field} must be a valid date"));
            }
            None
        }
    }
}

/// Parse a timestamp value: RFC 3339 string or integer epoch milliseconds.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

/// Return a new body containing only whitelisted keys.
///
/// Unknown keys are dropped silently, never rejected.
pub fn filtered_body(body: &Value, whitelist: &[&str]) -> Map<String, Value> {
    let mut filtered = Map::new();
    if let Some(map) = body.as_object() {
        for (key, value) in map {
            if whitelist.contains(&key.as_str()) {
                filtered.insert(key.clone(), value.clone());
            }
        }
    }
    filtered
}
