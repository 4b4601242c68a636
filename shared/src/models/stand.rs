//! Stand Model

use serde::{Deserialize, Serialize};

use super::Sector;

/// Which side of the field a stand sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    N,
    S,
    E,
    W,
}

impl Orientation {
    /// Whether the stand runs along the top or bottom of the field
    pub const fn is_horizontal(&self) -> bool {
        matches!(self, Self::N | Self::S)
    }
}

/// Deck type of a stand: a stacked tier (1st/2nd/3rd) or a corner wedge
///
/// Corner wedges combine their north/south variant with the stand's
/// E/W orientation to land in one of the four field corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckType {
    #[serde(rename = "1_deck")]
    Deck1,
    #[serde(rename = "2_deck")]
    Deck2,
    #[serde(rename = "3_deck")]
    Deck3,
    #[serde(rename = "corner_north")]
    CornerNorth,
    #[serde(rename = "corner_south")]
    CornerSouth,
}

impl DeckType {
    /// Stacking rank for deck stands (1 = innermost), `None` for corners
    pub const fn rank(&self) -> Option<u8> {
        match self {
            Self::Deck1 => Some(1),
            Self::Deck2 => Some(2),
            Self::Deck3 => Some(3),
            Self::CornerNorth | Self::CornerSouth => None,
        }
    }

    /// Whether this is a corner wedge
    pub const fn is_corner(&self) -> bool {
        self.rank().is_none()
    }
}

/// Stand entity (a seating block on one side of a numerated venue)
///
/// `orientation` and `deck_type` are optional at the wire level so a
/// partially configured venue still deserializes; validation requires
/// them and the layout engine skips stands where they are missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stand {
    pub id: Option<String>,
    pub name: String,
    pub orientation: Option<Orientation>,
    pub deck_type: Option<DeckType>,
    #[serde(default)]
    pub sectors: Vec<Sector>,
}

impl Stand {
    /// Whether this stand has everything the layout engine needs
    pub fn is_renderable(&self) -> bool {
        !self.name.is_empty()
            && self.orientation.is_some()
            && self.deck_type.is_some()
            && !self.sectors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_type_wire_names() {
        assert_eq!(serde_json::to_string(&DeckType::Deck1).unwrap(), "\"1_deck\"");
        assert_eq!(
            serde_json::to_string(&DeckType::CornerSouth).unwrap(),
            "\"corner_south\""
        );
        let dt: DeckType = serde_json::from_str("\"3_deck\"").unwrap();
        assert_eq!(dt, DeckType::Deck3);
    }

    #[test]
    fn test_rank() {
        assert_eq!(DeckType::Deck1.rank(), Some(1));
        assert_eq!(DeckType::Deck3.rank(), Some(3));
        assert_eq!(DeckType::CornerNorth.rank(), None);
        assert!(DeckType::CornerNorth.is_corner());
    }
}
