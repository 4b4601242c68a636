//! Utility module
//!
//! - [`AppError`] / [`AppResult`] - application error types (from
//!   `shared::error`)
//! - logging setup

pub mod logger;

// Re-export error types from shared for handler ergonomics
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
