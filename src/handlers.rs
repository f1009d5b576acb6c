//! HTTP request handlers for the event API.
//!
//! Each handler is stateless across requests: validate, whitelist, perform
//! one store operation, map the outcome to a status code. All errors are
//! translated at this boundary; nothing here panics the process.

use crate::models::{
    ErrorResponse, Event, EventFields, EventId, HealthResponse, ValidationErrorResponse,
};
use crate::store::{EventStore, StoreError};
use crate::validation::{self, ValidationErrors, EVENT_SCHEMA, EVENT_WRITABLE_FIELDS};
use axum::{
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EventStore>,
}

impl AppState {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }
}

/// Parse a path segment into an event id.
///
/// Parse failure means the id is syntactically invalid, which is a client
/// error regardless of whether any record exists.
fn parse_event_id(raw: &str) -> Result<EventId, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::MalformedId)
}

/// Validate and whitelist a write body into typed event fields.
///
/// Runs the full schema check first so the response reports every violated
/// field at once, then strips any key outside the writable whitelist.
fn writable_fields(body: &Value) -> Result<EventFields, ApiError> {
    validation::validate(&EVENT_SCHEMA, body)?;
    let filtered = validation::filtered_body(body, EVENT_WRITABLE_FIELDS);
    EventFields::from_body(&filtered).map_err(ApiError::Validation)
}

// === Health Check ===

/// GET /health - Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// === Event CRUD ===

/// GET /api/event - List all events
pub async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    Json(state.store.find_all())
}

/// GET /api/event/:id - Fetch a single event
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    let id = parse_event_id(&id)?;
    let event = state.store.find_by_id(&id).ok_or(ApiError::NotFound)?;
    Ok(Json(event))
}

/// POST /api/event - Create an event
///
/// The body is validated against the event schema and whitelisted before
/// the store is touched; extra keys are silently dropped.
pub async fn create_event(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let fields = writable_fields(&body)?;
    let event = state.store.insert(fields)?;

    info!(event_id = %event.id, "Event created");

    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/event/:id - Replace the writable fields of an event
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Event>, ApiError> {
    let fields = writable_fields(&body)?;
    let id = parse_event_id(&id)?;

    let event = state
        .store
        .update_by_id(&id, fields)
        .ok_or(ApiError::NotFound)?;

    info!(event_id = %id, "Event updated");

    Ok(Json(event))
}

/// DELETE /api/event/:id - Delete an event
///
/// Deleting a missing record is a failure, not a silent no-op: a
/// well-formed id with no match responds 404.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Map<String, Value>>, ApiError> {
    let id = parse_event_id(&id)?;

    state.store.remove_by_id(&id).ok_or(ApiError::NotFound)?;

    info!(event_id = %id, "Event deleted");

    Ok(Json(Map::new()))
}

// === Fallback ===

/// Fallback for unmatched routes.
///
/// Logged before responding so unexpected traffic shows up in the sink.
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    warn!(%method, %uri, "Not Found");
    ApiError::RouteNotFound
}

// === Error Handling ===

/// API error types, one per outcome in the error taxonomy
#[derive(Debug)]
pub enum ApiError {
    /// Client input failed the schema; per-field messages
    Validation(ValidationErrors),
    /// Syntactically invalid id
    MalformedId,
    /// Well-formed id, no matching record
    NotFound,
    /// Any other store failure
    Store(StoreError),
    /// Unmatched route
    RouteNotFound,
}

/// Enables `?` on validation results in handlers
impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

/// Enables `?` on store results in handlers
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Validation(errors) => {
                let body = Json(ValidationErrorResponse {
                    message: "validation error",
                    errors,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::MalformedId => {
                let body = Json(ErrorResponse {
                    message: "malformed event id".to_string(),
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Store(err) => {
                let body = Json(ErrorResponse {
                    message: err.to_string(),
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::RouteNotFound => {
                let body = Json(ErrorResponse {
                    message: "Not Found".to_string(),
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
        }
    }
}
