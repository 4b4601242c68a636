//! Layout configuration and theme
//!
//! Dimension constants and per-orientation colors are an explicit config
//! object passed into the layout engine, not module globals, so multiple
//! venues can be laid out concurrently with different themes.

use serde::{Deserialize, Serialize};
use shared::models::Orientation;

/// Dimension constants of the schematic layout, in canvas pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Gap between the field, stands, and the canvas edge
    pub padding: f32,
    /// Fixed width of the field rectangle
    pub field_width: f32,
    /// Fixed height of the field rectangle
    pub field_height: f32,
    /// Thickness of one deck tier
    pub stand_depth: f32,
    /// Spacing between stacked decks on the same side
    pub tray_gap: f32,
    /// Side length of a corner wedge box
    pub corner_size: f32,
    pub theme: Theme,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 20.0,
            field_width: 300.0,
            field_height: 180.0,
            stand_depth: 40.0,
            tray_gap: 8.0,
            corner_size: 60.0,
            theme: Theme::default(),
        }
    }
}

impl LayoutConfig {
    /// Center-to-center distance between two stacked decks
    pub fn deck_pitch(&self) -> f32 {
        self.stand_depth + self.tray_gap
    }
}

/// Stand fill colors keyed by orientation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub north: String,
    pub south: String,
    pub east: String,
    pub west: String,
    pub field: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            north: "#4e79a7".to_string(),
            south: "#f28e2b".to_string(),
            east: "#59a14f".to_string(),
            west: "#e15759".to_string(),
            field: "#8cd17d".to_string(),
        }
    }
}

impl Theme {
    /// Fill color for a stand on the given side
    pub fn color(&self, orientation: Orientation) -> &str {
        match orientation {
            Orientation::N => &self.north,
            Orientation::S => &self.south,
            Orientation::E => &self.east,
            Orientation::W => &self.west,
        }
    }
}
