//! In-memory document store for events.
//!
//! Exposes the five document operations the handlers need: find-all,
//! find-by-id, insert, update-by-id, remove-by-id. Ids are assigned on
//! insert and immutable; `created_at`/`updated_at` are maintained here, not
//! by callers. Concurrent writes to the same id are serialized by the
//! map's per-entry locking; there is no application-level locking.

use crate::config::Config;
use crate::models::{Event, EventFields, EventId};
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Thread-safe in-memory event store
#[derive(Clone)]
pub struct EventStore {
    /// Event documents by id
    events: Arc<DashMap<EventId, Event>>,

    /// Maximum number of stored events (memory exhaustion guard)
    max_events: usize,
}

impl EventStore {
    /// Create a new empty store
    pub fn new(config: &Config) -> Self {
        Self {
            events: Arc::new(DashMap::new()),
            max_events: config.max_events,
        }
    }

    /// Current number of stored events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Fetch all events, oldest first.
    ///
    /// The secondary id ordering keeps listings stable when timestamps
    /// collide (bulk seeding inserts within the same millisecond).
    pub fn find_all(&self) -> Vec<Event> {
        let mut events: Vec<Event> = self.events.iter().map(|e| e.value().clone()).collect();
        events.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        events
    }

    /// Fetch one event by id
    pub fn find_by_id(&self, id: &EventId) -> Option<Event> {
        self.events.get(id).map(|e| e.value().clone())
    }

    /// Insert a new event, assigning id and timestamps
    pub fn insert(&self, fields: EventFields) -> Result<Event, StoreError> {
        if self.events.len() >= self.max_events {
            return Err(StoreError::AtCapacity);
        }

        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4(),
            name: fields.name,
            start_date: fields.start_date,
            end_date: fields.end_date,
            created_at: now,
            updated_at: now,
        };

        debug!(event_id = %event.id, "Inserted event");

        self.events.insert(event.id, event.clone());
        Ok(event)
    }

    /// Replace the writable fields of an event, refreshing `updated_at`.
    ///
    /// Returns the updated document, or `None` when no record matches.
    pub fn update_by_id(&self, id: &EventId, fields: EventFields) -> Option<Event> {
        let mut entry = self.events.get_mut(id)?;
        let event = entry.value_mut();

        event.name = fields.name;
        event.start_date = fields.start_date;
        event.end_date = fields.end_date;
        event.updated_at = Utc::now();

        debug!(event_id = %id, "Updated event");

        Some(event.clone())
    }

    /// Remove an event by id, returning the removed document
    pub fn remove_by_id(&self, id: &EventId) -> Option<Event> {
        let removed = self.events.remove(id).map(|(_, event)| event);
        if removed.is_some() {
            debug!(event_id = %id, "Removed event");
        }
        removed
    }

    /// Delete all events (used by seeding)
    pub fn clear(&self) {
        self.events.clear();
    }
}

/// Store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("event store at capacity")]
    AtCapacity,
}
