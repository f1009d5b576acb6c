//! # Events Backend
//!
//! Minimal CRUD HTTP service for a single Event resource, backed by an
//! in-memory document store.
//!
//! ## Request Pipeline
//!
//! ```text
//! Router ──▶ Validator ──▶ Whitelist ──▶ Handler ──▶ Document store
//!                                           │
//!                                           ▼
//!                               status code + JSON body
//! ```
//!
//! - Write bodies are checked against a static field schema; all violations
//!   are reported in one response.
//! - Only whitelisted fields ever reach the store (mass-assignment defense).
//! - Each handler performs one store operation and maps the outcome to an
//!   HTTP status: malformed id → 400, missing record → 404, store failure
//!   → 400.
//!
//! ## API Overview
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/health` | GET | Health check |
//! | `/api/event` | GET | List events |
//! | `/api/event/:id` | GET | Fetch one event |
//! | `/api/event` | POST | Create an event |
//! | `/api/event/:id` | PUT | Replace an event's writable fields |
//! | `/api/event/:id` | DELETE | Delete an event |

pub mod config;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod store;
pub mod validation;

pub use config::Config;
pub use handlers::AppState;
pub use store::EventStore;

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// Maximum request body size (16 KiB).
pub const MAX_BODY_SIZE: usize = 16 * 1024;

/// Build the Axum router with all endpoints and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Event resource
        .route(
            "/api/event",
            get(handlers::list_events)
                .post(handlers::create_event)
                // Unsupported methods respond 404, not 405
                .fallback(handlers::route_not_found),
        )
        .route(
            "/api/event/:id",
            get(handlers::get_event)
                .put(handlers::update_event)
                .delete(handlers::delete_event)
                .fallback(handlers::route_not_found),
        )
        // Everything else is a logged 404
        .fallback(handlers::route_not_found)
        // Middleware stack (order matters: first added = outermost)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
