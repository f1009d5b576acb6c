//! Configuration for the event API server.
//!
//! All configuration is loaded from environment variables, with `.env`
//! support at startup. Defaults are suitable for local development.

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,

    /// Server port
    pub port: u16,

    /// Maximum number of stored events (default: 10,000)
    pub max_events: usize,

    /// Number of sample events to seed at startup (default: 0, disabled)
    pub seed_events: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            max_events: std::env::var("MAX_EVENTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10_000),
            seed_events: std::env::var("SEED_EVENTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
        }
    }

    /// Fixed configuration for tests, independent of the environment
    pub fn for_tests() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 0,
            max_events: 10_000,
            seed_events: 0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
