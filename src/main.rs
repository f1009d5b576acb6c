//! Events Backend - Event CRUD API server
//!
//! Bootstraps the process: loads environment configuration, initializes
//! structured logging, builds the store (seeding sample data when
//! configured), and serves the HTTP API.

use events_backend::{build_router, seed, AppState, Config, EventStore};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize structured logging
    init_tracing();

    // Load configuration
    let config = Config::from_env();
    log_startup_info(&config);

    // The store is constructed once at startup and shared by all requests;
    // it serializes concurrent writes to the same record itself.
    let store = Arc::new(EventStore::new(&config));

    if config.seed_events > 0 && store.is_empty() {
        if let Err(err) = seed::seed_events(&store, config.seed_events) {
            tracing::error!(error = %err, "Seeding failed");
        }
    }

    let state = AppState::new(store);

    // Build and serve the application
    let app = build_router(state);
    serve(app, &config).await;
}

/// Initialize tracing with environment-based log levels.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("events_backend=debug,tower_http=info")),
        )
        .init();
}

/// Log startup configuration (no secrets).
fn log_startup_info(config: &Config) {
    info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        storage = "memory",
        max_events = config.max_events,
        seed_events = config.seed_events,
        "Starting events backend"
    );
}

/// Bind to address and serve the application.
async fn serve(app: axum::Router, config: &Config) {
    let bind_addr = format!("{}:{}", config.bind_addr, config.port);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind to address");

    info!(addr = %bind_addr, "Server listening");

    axum::serve(listener, app).await.expect("Server error");
}
