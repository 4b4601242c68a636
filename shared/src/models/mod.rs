//! Venue data models
//!
//! The Stadium aggregate and its nested Stand/Sector/Row structure, plus
//! the configuration validation that gates persistence and layout.

mod sector;
mod stadium;
mod stand;
pub mod validate;

pub use sector::{Row, Sector};
pub use stadium::{SegmentationType, Stadium, StadiumCreate, StadiumUpdate};
pub use stand::{DeckType, Orientation, Stand};
