//! Event schedule collaborator
//!
//! Editing a venue is blocked while an event is actively taking place
//! there. Whether that is the case is owned by the event-scheduling
//! system; this trait is its boundary.

use async_trait::async_trait;
use dashmap::DashMap;
use shared::AppResult;

/// Read side of the external event-scheduling collaborator
#[async_trait]
pub trait EventSchedule: Send + Sync {
    /// Whether an event is currently in progress at the given venue
    async fn event_in_progress(&self, stadium_id: &str) -> AppResult<bool>;
}

/// In-memory schedule with explicitly marked active venues
///
/// Stands in for the real scheduling system in development and tests.
#[derive(Debug, Default)]
pub struct StaticSchedule {
    active: DashMap<String, ()>,
}

impl StaticSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark or clear an ongoing event at a venue
    pub fn set_event_in_progress(&self, stadium_id: &str, in_progress: bool) {
        if in_progress {
            self.active.insert(stadium_id.to_string(), ());
        } else {
            self.active.remove(stadium_id);
        }
    }
}

#[async_trait]
impl EventSchedule for StaticSchedule {
    async fn event_in_progress(&self, stadium_id: &str) -> AppResult<bool> {
        Ok(self.active.contains_key(stadium_id))
    }
}
