//! Drill-Down Navigator
//!
//! A three-level state machine over the rendered canvas: whole-stadium
//! overview, sector chooser for one stand, seat grid for one sector.
//! Holds at most one current stand and one current sector; depth is fixed,
//! so there is no navigation stack. Selection is presentation-only state,
//! never a mutation of the venue model.

use shared::models::{Sector, Stand};

/// Current drill-down position
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewState {
    /// Whole stadium: field plus all stand shapes
    Overview,
    /// Sector chooser for one stand
    StandZoom { stand: Stand },
    /// Seat grid for one sector of a stand
    SectorZoom { stand: Stand, sector: Sector },
}

/// Drill-down state machine
#[derive(Debug, Clone)]
pub struct Navigator {
    state: PreviewState,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            state: PreviewState::Overview,
        }
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    /// Stand currently drilled into, if any
    pub fn current_stand(&self) -> Option<&Stand> {
        match &self.state {
            PreviewState::Overview => None,
            PreviewState::StandZoom { stand } | PreviewState::SectorZoom { stand, .. } => {
                Some(stand)
            }
        }
    }

    /// Sector currently drilled into, if any
    pub fn current_sector(&self) -> Option<&Sector> {
        match &self.state {
            PreviewState::SectorZoom { sector, .. } => Some(sector),
            _ => None,
        }
    }

    /// Drill into a stand clicked on the overview.
    ///
    /// A stand with exactly one sector has nothing to choose among, so the
    /// transition skips straight to its sector zoom. Ignored outside the
    /// overview. Returns whether a transition happened.
    pub fn select_stand(&mut self, stand: &Stand) -> bool {
        if !matches!(self.state, PreviewState::Overview) {
            return false;
        }
        self.state = match stand.sectors.as_slice() {
            [] => return false,
            [only] => PreviewState::SectorZoom {
                stand: stand.clone(),
                sector: only.clone(),
            },
            _ => PreviewState::StandZoom {
                stand: stand.clone(),
            },
        };
        true
    }

    /// Pick a sector from the stand-zoom chooser, by position in the
    /// chooser. Ignored outside stand zoom or for an out-of-range index.
    /// Returns whether a transition happened.
    pub fn select_sector(&mut self, index: usize) -> bool {
        let PreviewState::StandZoom { stand } = &self.state else {
            return false;
        };
        let Some(sector) = stand.sectors.get(index) else {
            return false;
        };
        self.state = PreviewState::SectorZoom {
            stand: stand.clone(),
            sector: sector.clone(),
        };
        true
    }

    /// Step one level back.
    ///
    /// From sector zoom this returns to the chooser only when the
    /// originating stand has more than one sector, mirroring the skip on
    /// entry; otherwise straight to the overview. No-op at the overview.
    pub fn back(&mut self) {
        self.state = match std::mem::replace(&mut self.state, PreviewState::Overview) {
            PreviewState::SectorZoom { stand, .. } if stand.sectors.len() > 1 => {
                PreviewState::StandZoom { stand }
            }
            _ => PreviewState::Overview,
        };
    }

    /// Return to the overview unconditionally (closing and reopening the
    /// preview always starts fresh).
    pub fn reset(&mut self) {
        self.state = PreviewState::Overview;
    }
}
