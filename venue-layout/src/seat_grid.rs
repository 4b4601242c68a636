//! Seat Grid Renderer
//!
//! Lays out a sector's rows of seats on a uniform grid and produces the
//! human-facing seat codes. The full grid is always computed; only the
//! viewport is clamped to a fixed number of visible rows, so scrolling
//! repositions the viewport without re-running geometry.

use serde::{Deserialize, Serialize};
use shared::models::Sector;

/// Seat grid dimension constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatGridConfig {
    /// Diameter of one seat circle
    pub seat_diameter: f32,
    /// Gap between adjacent seats and between rows
    pub row_gap: f32,
    /// Maximum simultaneously visible rows; the rest scroll
    pub visible_rows: usize,
}

impl Default for SeatGridConfig {
    fn default() -> Self {
        Self {
            seat_diameter: 24.0,
            row_gap: 8.0,
            visible_rows: 4,
        }
    }
}

impl SeatGridConfig {
    /// Center-to-center distance between adjacent seats or rows
    pub fn pitch(&self) -> f32 {
        self.seat_diameter + self.row_gap
    }
}

/// One positioned seat with its code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatPosition {
    pub x: f32,
    pub y: f32,
    /// Seat code: row label + 1-based index ("A3")
    pub label: String,
}

/// One positioned row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatRow {
    pub label: String,
    pub y: f32,
    /// Empty for aisle placeholder rows (`seat_count = 0`)
    pub seats: Vec<SeatPosition>,
}

/// The computed seat grid for one sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatGrid {
    pub rows: Vec<SeatRow>,
    /// Full grid extent (all rows, not just the visible window)
    pub width: f32,
    pub height: f32,
    /// Clamped display height: at most `visible_rows` rows
    pub viewport_height: f32,
    row_pitch: f32,
    visible_rows: usize,
}

impl SeatGrid {
    /// Vertical offset that scrolls the viewport so `first_row` is the top
    /// visible row, clamped so the viewport never runs past the last row.
    /// Pure repositioning: no seat coordinates are recomputed.
    pub fn scroll_offset(&self, first_row: usize) -> f32 {
        let max_first = self.rows.len().saturating_sub(self.visible_rows);
        first_row.min(max_first) as f32 * self.row_pitch
    }

    /// All seat codes in the grid, row by row
    pub fn seat_labels(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .flat_map(|r| r.seats.iter().map(|s| s.label.as_str()))
    }
}

/// Compute the seat grid for a sector.
///
/// Row `i` sits at `i × pitch`, seat `j` within a row at `j × pitch`.
/// Rows with `seat_count = 0` are kept as aisle placeholders: they render
/// zero seats but still advance the grid by one row pitch.
pub fn seat_grid(sector: &Sector, config: &SeatGridConfig) -> SeatGrid {
    let pitch = config.pitch();

    let rows: Vec<SeatRow> = sector
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let y = i as f32 * pitch;
            let seats = (0..row.seat_count)
                .map(|j| SeatPosition {
                    x: j as f32 * pitch,
                    y,
                    label: row.seat_code(j),
                })
                .collect();
            SeatRow {
                label: row.label.clone(),
                y,
                seats,
            }
        })
        .collect();

    let max_seats = sector.rows.iter().map(|r| r.seat_count).max().unwrap_or(0);
    let extent = |count: usize| -> f32 {
        if count == 0 {
            0.0
        } else {
            (count - 1) as f32 * pitch + config.seat_diameter
        }
    };

    SeatGrid {
        width: extent(max_seats as usize),
        height: extent(rows.len()),
        viewport_height: extent(rows.len().min(config.visible_rows)),
        row_pitch: pitch,
        visible_rows: config.visible_rows,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Row;
    use std::collections::HashSet;

    fn row(label: &str, seats: u32) -> Row {
        Row {
            id: None,
            label: label.to_string(),
            seat_count: seats,
        }
    }

    fn sector(rows: Vec<Row>) -> Sector {
        Sector {
            id: None,
            name: "Baja".to_string(),
            rows,
        }
    }

    #[test]
    fn test_ten_seats_labeled_one_through_ten() {
        let grid = seat_grid(&sector(vec![row("A", 10)]), &SeatGridConfig::default());
        let labels: Vec<&str> = grid.seat_labels().collect();
        assert_eq!(labels.len(), 10);
        assert_eq!(labels[0], "A1");
        assert_eq!(labels[9], "A10");
    }

    #[test]
    fn test_grid_positions_follow_pitch() {
        let config = SeatGridConfig::default();
        let grid = seat_grid(&sector(vec![row("A", 3), row("B", 3)]), &config);
        assert_eq!(grid.rows[1].y, config.pitch());
        assert_eq!(grid.rows[1].seats[2].x, 2.0 * config.pitch());
    }

    #[test]
    fn test_seat_labels_unique_within_sector() {
        let grid = seat_grid(
            &sector(vec![row("A", 20), row("B", 20), row("AA", 20)]),
            &SeatGridConfig::default(),
        );
        let labels: Vec<&str> = grid.seat_labels().collect();
        let unique: HashSet<&str> = labels.iter().copied().collect();
        assert_eq!(labels.len(), unique.len());
    }

    #[test]
    fn test_empty_row_is_an_aisle() {
        let config = SeatGridConfig::default();
        let grid = seat_grid(&sector(vec![row("A", 4), row("B", 0), row("C", 4)]), &config);
        assert!(grid.rows[1].seats.is_empty());
        // The aisle still occupies one row pitch
        assert_eq!(grid.rows[2].y, 2.0 * config.pitch());
    }

    #[test]
    fn test_empty_sector_is_zero_by_zero() {
        let grid = seat_grid(&sector(vec![]), &SeatGridConfig::default());
        assert_eq!(grid.width, 0.0);
        assert_eq!(grid.height, 0.0);
        assert_eq!(grid.viewport_height, 0.0);
        assert_eq!(grid.scroll_offset(3), 0.0);
    }

    #[test]
    fn test_viewport_clamped_to_visible_rows() {
        let config = SeatGridConfig::default();
        let rows: Vec<Row> = (0..10).map(|i| row(&format!("R{i}"), 5)).collect();
        let grid = seat_grid(&sector(rows), &config);
        // Full grid computed, viewport clamped
        assert_eq!(grid.rows.len(), 10);
        assert!(grid.height > grid.viewport_height);
        assert_eq!(
            grid.viewport_height,
            3.0 * config.pitch() + config.seat_diameter
        );
    }

    #[test]
    fn test_scroll_offset_clamps_at_end() {
        let config = SeatGridConfig::default();
        let rows: Vec<Row> = (0..10).map(|i| row(&format!("R{i}"), 5)).collect();
        let grid = seat_grid(&sector(rows), &config);
        assert_eq!(grid.scroll_offset(0), 0.0);
        assert_eq!(grid.scroll_offset(2), 2.0 * config.pitch());
        // 10 rows, 4 visible: the viewport can start at row 6 at most
        assert_eq!(grid.scroll_offset(9), 6.0 * config.pitch());
        assert_eq!(grid.scroll_offset(100), 6.0 * config.pitch());
    }
}
