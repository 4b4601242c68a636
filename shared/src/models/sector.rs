//! Sector and Row Models

use serde::{Deserialize, Serialize};

/// Sector entity (a named subdivision of a stand, or of a sectorized venue)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Sector {
    /// Total seats across all rows
    pub fn seat_total(&self) -> u32 {
        self.rows.iter().map(|r| r.seat_count).sum()
    }
}

/// Row entity (a labeled line of seats)
///
/// `seat_count = 0` is valid: an empty row acts as an aisle placeholder
/// and renders zero seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: Option<String>,
    pub label: String,
    pub seat_count: u32,
}

impl Row {
    /// Human-facing seat code: row label + 1-based seat index ("A" + 2 -> "A3")
    pub fn seat_code(&self, index: u32) -> String {
        format!("{}{}", self.label, index + 1)
    }
}
