//! Shared types for the venue platform
//!
//! Common types used across the workspace: the Stadium aggregate and its
//! nested Stand/Sector/Row models, the unified error system, response
//! structures, and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    DeckType, Orientation, Row, Sector, SegmentationType, Stadium, StadiumCreate, StadiumUpdate,
    Stand,
};
