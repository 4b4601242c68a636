//! External collaborator seams

mod schedule;

pub use schedule::{EventSchedule, StaticSchedule};
