//! Venue layout engine
//!
//! The client-side computational core of the venue platform:
//!
//! - **geometry**: deterministic 2D layout of a stadium's stands around
//!   the field (deck rectangles, corner wedges, canvas bounds)
//! - **seat_grid**: seat positions and codes for one sector, with a
//!   scrollable viewport window
//! - **navigator**: the drill-down state machine from overview to stand
//!   to sector
//!
//! Everything here is pure and synchronous: no I/O, no shared state, safe
//! to recompute on every render. Data flows one way (configuration model
//! in, layout descriptor out) and user interaction only moves the
//! navigator, never the model.

pub mod config;
pub mod geometry;
pub mod navigator;
pub mod seat_grid;

pub use config::{LayoutConfig, Theme};
pub use geometry::{layout, CornerQuadrant, Point, Rect, StadiumLayout, StandShape};
pub use navigator::{Navigator, PreviewState};
pub use seat_grid::{seat_grid, SeatGrid, SeatGridConfig, SeatPosition, SeatRow};
