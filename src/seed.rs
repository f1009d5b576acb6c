//! Sample data seeding.
//!
//! Inserts generated events at startup when `SEED_EVENTS` is configured.
//! Useful for local development and demos; never exposed over HTTP.

use crate::models::EventFields;
use crate::store::{EventStore, StoreError};
use chrono::{Duration, Utc};
use tracing::info;

const SAMPLE_NAMES: &[&str] = &[
    "Team Offsite",
    "Product Launch",
    "Quarterly Review",
    "Hack Week",
    "Community Meetup",
];

/// Insert `count` generated events with future dates.
pub fn seed_events(store: &EventStore, count: usize) -> Result<usize, StoreError> {
    let now = Utc::now();

    for i in 0..count {
        let start = now + Duration::days(i as i64 + 1);
        store.insert(EventFields {
            name: format!("{} {}", SAMPLE_NAMES[i % SAMPLE_NAMES.len()], i + 1),
            start_date: start,
            end_date: start + Duration::hours(2),
        })?;
    }

    info!(count, "Seeded sample events");

    Ok(count)
}

/// Delete all seeded (and any other) events.
pub fn clear_events(store: &EventStore) {
    store.clear();
}
