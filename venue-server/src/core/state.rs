use std::sync::Arc;

use crate::core::Config;
use crate::db::repository::{MemoryStadiumRepository, StadiumRepository};
use crate::services::{EventSchedule, StaticSchedule};

/// Server state holding shared references to every service
///
/// Cloning is cheap: all components sit behind `Arc`. The repository and
/// the event-schedule collaborator are trait objects so tests (and a
/// future real persistence backend) can swap implementations.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    stadiums: Arc<dyn StadiumRepository>,
    schedule: Arc<dyn EventSchedule>,
}

impl ServerState {
    /// Initialize state with the default in-memory services
    pub fn initialize(config: &Config) -> Self {
        Self {
            config: Arc::new(config.clone()),
            stadiums: Arc::new(MemoryStadiumRepository::new()),
            schedule: Arc::new(StaticSchedule::new()),
        }
    }

    /// Build state from explicit parts (used by tests)
    pub fn with_parts(
        config: Config,
        stadiums: Arc<dyn StadiumRepository>,
        schedule: Arc<dyn EventSchedule>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            stadiums,
            schedule,
        }
    }

    pub fn stadiums(&self) -> &Arc<dyn StadiumRepository> {
        &self.stadiums
    }

    pub fn schedule(&self) -> &Arc<dyn EventSchedule> {
        &self.schedule
    }
}
