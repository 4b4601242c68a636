//! Layout Geometry Calculator
//!
//! Maps an ordered list of stands to a deterministic 2D layout: the field
//! rectangle, one rectangle per deck stand (stacked outward by rank), one
//! wedge path per corner stand, and the overall canvas size. Purely
//! arithmetic, no DOM or runtime dependency, so it can run off-thread and
//! is unit-testable headlessly. Re-invoking with the same input yields
//! bit-identical output.

use serde::{Deserialize, Serialize};
use shared::models::{DeckType, Orientation, Stand};

use crate::config::LayoutConfig;

/// A point on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// An axis-aligned rectangle on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// Which field corner a wedge occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CornerQuadrant {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl CornerQuadrant {
    /// Combine a corner deck type with the stand's E/W orientation.
    ///
    /// Corner stands facing N or S have no defined quadrant and are
    /// treated as malformed by the caller.
    fn from_stand(deck_type: DeckType, orientation: Orientation) -> Option<Self> {
        match (deck_type, orientation) {
            (DeckType::CornerNorth, Orientation::W) => Some(Self::NorthWest),
            (DeckType::CornerNorth, Orientation::E) => Some(Self::NorthEast),
            (DeckType::CornerSouth, Orientation::W) => Some(Self::SouthWest),
            (DeckType::CornerSouth, Orientation::E) => Some(Self::SouthEast),
            _ => None,
        }
    }

    const fn is_north(&self) -> bool {
        matches!(self, Self::NorthWest | Self::NorthEast)
    }

    const fn is_west(&self) -> bool {
        matches!(self, Self::NorthWest | Self::SouthWest)
    }
}

/// One positioned stand shape, ready for rendering and hit-testing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StandShape {
    /// A deck stand: rectangle flush against the field, stacked by rank
    #[serde(rename_all = "camelCase")]
    Deck {
        stand_id: Option<String>,
        name: String,
        orientation: Orientation,
        rank: u8,
        rect: Rect,
        label_center: Point,
        color: String,
    },
    /// A corner stand: wedge quadrilateral in the reserved corner box
    #[serde(rename_all = "camelCase")]
    Corner {
        stand_id: Option<String>,
        name: String,
        quadrant: CornerQuadrant,
        points: [Point; 4],
        bounds: Rect,
        label_center: Point,
        color: String,
    },
}

impl StandShape {
    pub fn name(&self) -> &str {
        match self {
            Self::Deck { name, .. } | Self::Corner { name, .. } => name,
        }
    }

    pub fn stand_id(&self) -> Option<&str> {
        match self {
            Self::Deck { stand_id, .. } | Self::Corner { stand_id, .. } => stand_id.as_deref(),
        }
    }

    /// Bounding rectangle, for hit-testing clicks
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Deck { rect, .. } => *rect,
            Self::Corner { bounds, .. } => *bounds,
        }
    }
}

/// The computed layout descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StadiumLayout {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub field: Rect,
    pub stands: Vec<StandShape>,
}

impl StadiumLayout {
    /// Stand shape under the given canvas point, if any
    pub fn hit_test(&self, p: Point) -> Option<&StandShape> {
        self.stands.iter().find(|s| s.bounds().contains(p))
    }
}

/// Per-rank presence flags for one side of the field (index 0 = rank 1)
#[derive(Debug, Default, Clone, Copy)]
struct SideRanks([bool; 3]);

impl SideRanks {
    /// Offset this side's stands claim between the canvas edge and the
    /// field: padding, plus each present rank from outermost to innermost.
    /// The innermost present rank ends `padding` from the field, outer
    /// ranks are separated by `tray_gap`.
    fn offset(&self, config: &LayoutConfig) -> f32 {
        let innermost = self.0.iter().position(|&p| p);
        let mut offset = config.padding;
        for r in (0..3).rev() {
            if self.0[r] {
                offset += config.stand_depth;
                offset += if innermost == Some(r) {
                    config.padding
                } else {
                    config.tray_gap
                };
            }
        }
        offset
    }
}

/// Presence flags gathered from a single pass over the stands
#[derive(Debug, Default)]
struct Presence {
    north: SideRanks,
    south: SideRanks,
    east: SideRanks,
    west: SideRanks,
    corners: [bool; 4], // NW, NE, SW, SE
}

impl Presence {
    fn classify(stands: &[Stand]) -> Self {
        let mut p = Self::default();
        for stand in stands.iter().filter(|s| s.is_renderable()) {
            // is_renderable guarantees both are Some
            let (Some(orientation), Some(deck_type)) = (stand.orientation, stand.deck_type)
            else {
                continue;
            };
            match deck_type.rank() {
                Some(rank) => {
                    let side = match orientation {
                        Orientation::N => &mut p.north,
                        Orientation::S => &mut p.south,
                        Orientation::E => &mut p.east,
                        Orientation::W => &mut p.west,
                    };
                    side.0[(rank - 1) as usize] = true;
                }
                None => {
                    if let Some(q) = CornerQuadrant::from_stand(deck_type, orientation) {
                        p.corners[corner_index(q)] = true;
                    }
                }
            }
        }
        p
    }

    fn has_north_corner(&self) -> bool {
        self.corners[corner_index(CornerQuadrant::NorthWest)]
            || self.corners[corner_index(CornerQuadrant::NorthEast)]
    }

    fn has_south_corner(&self) -> bool {
        self.corners[corner_index(CornerQuadrant::SouthWest)]
            || self.corners[corner_index(CornerQuadrant::SouthEast)]
    }

    fn has_west_corner(&self) -> bool {
        self.corners[corner_index(CornerQuadrant::NorthWest)]
            || self.corners[corner_index(CornerQuadrant::SouthWest)]
    }

    fn has_east_corner(&self) -> bool {
        self.corners[corner_index(CornerQuadrant::NorthEast)]
            || self.corners[corner_index(CornerQuadrant::SouthEast)]
    }
}

const fn corner_index(q: CornerQuadrant) -> usize {
    match q {
        CornerQuadrant::NorthWest => 0,
        CornerQuadrant::NorthEast => 1,
        CornerQuadrant::SouthWest => 2,
        CornerQuadrant::SouthEast => 3,
    }
}

/// Compute the full stadium layout for an ordered list of stands.
///
/// Stands missing a name, orientation, deck type, or sectors are skipped
/// (logged, not an error), so a partially configured venue still renders
/// its valid stands. Zero stands produce a field-only layout.
pub fn layout(stands: &[Stand], config: &LayoutConfig) -> StadiumLayout {
    let presence = Presence::classify(stands);

    // Offsets are computed independently per side: a rank present on one
    // side never affects the facing side.
    let top_offset = presence.north.offset(config);
    let bottom_offset = presence.south.offset(config);
    let left_offset = presence.west.offset(config);
    let right_offset = presence.east.offset(config);

    let corner_space = config.corner_size + config.padding;
    let top_corner = if presence.has_north_corner() { corner_space } else { 0.0 };
    let bottom_corner = if presence.has_south_corner() { corner_space } else { 0.0 };
    let left_corner = if presence.has_west_corner() { corner_space } else { 0.0 };
    let right_corner = if presence.has_east_corner() { corner_space } else { 0.0 };

    let field = Rect {
        x: left_offset + left_corner,
        y: top_offset + top_corner,
        width: config.field_width,
        height: config.field_height,
    };

    let canvas_width = field.right() + right_offset + right_corner + config.padding;
    let canvas_height = field.bottom() + bottom_offset + bottom_corner + config.padding;

    let mut shapes = Vec::with_capacity(stands.len());
    for stand in stands {
        if !stand.is_renderable() {
            tracing::warn!(
                stand_id = stand.id.as_deref().unwrap_or("?"),
                "skipping partially configured stand"
            );
            continue;
        }
        let (Some(orientation), Some(deck_type)) = (stand.orientation, stand.deck_type) else {
            continue;
        };
        match deck_type.rank() {
            Some(rank) => shapes.push(deck_shape(stand, orientation, rank, &field, config)),
            None => match CornerQuadrant::from_stand(deck_type, orientation) {
                Some(q) => shapes.push(corner_shape(stand, q, &field, config)),
                None => {
                    tracing::warn!(
                        stand_id = stand.id.as_deref().unwrap_or("?"),
                        "skipping corner stand with N/S orientation"
                    );
                }
            },
        }
    }

    StadiumLayout {
        canvas_width,
        canvas_height,
        field,
        stands: shapes,
    }
}

/// Rectangle for a deck stand, flush against the field on its side and
/// pushed outward by `(rank - 1)` deck pitches.
fn deck_shape(
    stand: &Stand,
    orientation: Orientation,
    rank: u8,
    field: &Rect,
    config: &LayoutConfig,
) -> StandShape {
    let stack = (rank - 1) as f32 * config.deck_pitch();
    let rect = match orientation {
        Orientation::N => Rect {
            x: field.x,
            y: field.y - config.padding - config.stand_depth - stack,
            width: config.field_width,
            height: config.stand_depth,
        },
        Orientation::S => Rect {
            x: field.x,
            y: field.bottom() + config.padding + stack,
            width: config.field_width,
            height: config.stand_depth,
        },
        Orientation::W => Rect {
            x: field.x - config.padding - config.stand_depth - stack,
            y: field.y,
            width: config.stand_depth,
            height: config.field_height,
        },
        Orientation::E => Rect {
            x: field.right() + config.padding + stack,
            y: field.y,
            width: config.stand_depth,
            height: config.field_height,
        },
    };
    StandShape::Deck {
        stand_id: stand.id.clone(),
        name: stand.name.clone(),
        orientation,
        rank,
        rect,
        label_center: rect.center(),
        color: config.theme.color(orientation).to_string(),
    }
}

/// Wedge quadrilateral for a corner stand.
///
/// The wedge hugs the outer corner of the reserved box and is chamfered
/// toward the field corner: the outer corner vertex, the full edge along
/// the box, and two half-edge vertices facing the field.
fn corner_shape(
    stand: &Stand,
    quadrant: CornerQuadrant,
    field: &Rect,
    config: &LayoutConfig,
) -> StandShape {
    let s = config.corner_size;
    let bounds = Rect {
        x: if quadrant.is_west() {
            field.x - config.padding - s
        } else {
            field.right() + config.padding
        },
        y: if quadrant.is_north() {
            field.y - config.padding - s
        } else {
            field.bottom() + config.padding
        },
        width: s,
        height: s,
    };

    // Outer corner of the box and the unit directions pointing inward
    let (ox, dx) = if quadrant.is_west() {
        (bounds.x, 1.0)
    } else {
        (bounds.right(), -1.0)
    };
    let (oy, dy) = if quadrant.is_north() {
        (bounds.y, 1.0)
    } else {
        (bounds.bottom(), -1.0)
    };

    let points = [
        Point { x: ox, y: oy },
        Point { x: ox + s * dx, y: oy },
        Point { x: ox + s * dx, y: oy + s / 2.0 * dy },
        Point { x: ox + s / 2.0 * dx, y: oy + s * dy },
    ];

    // Corners have no single side; color by the stand's E/W orientation
    let orientation = if quadrant.is_west() { Orientation::W } else { Orientation::E };

    StandShape::Corner {
        stand_id: stand.id.clone(),
        name: stand.name.clone(),
        quadrant,
        points,
        bounds,
        label_center: bounds.center(),
        color: config.theme.color(orientation).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Row, Sector};

    fn sector() -> Sector {
        Sector {
            id: None,
            name: "Baja".to_string(),
            rows: vec![Row {
                id: None,
                label: "A".to_string(),
                seat_count: 10,
            }],
        }
    }

    fn stand(name: &str, orientation: Orientation, deck_type: DeckType) -> Stand {
        Stand {
            id: Some(format!("stand-{name}")),
            name: name.to_string(),
            orientation: Some(orientation),
            deck_type: Some(deck_type),
            sectors: vec![sector()],
        }
    }

    fn cfg() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn test_empty_configuration_renders_field_only() {
        let config = cfg();
        let l = layout(&[], &config);
        assert!(l.stands.is_empty());
        // Only padding around the field on every side
        assert_eq!(l.field.x, config.padding);
        assert_eq!(l.field.y, config.padding);
        assert_eq!(l.canvas_width, l.field.right() + 2.0 * config.padding);
    }

    #[test]
    fn test_single_north_deck_sits_padding_above_field() {
        let config = cfg();
        let stands = vec![stand("Norte", Orientation::N, DeckType::Deck1)];
        let l = layout(&stands, &config);

        assert_eq!(l.stands.len(), 1);
        let StandShape::Deck { rect, rank, .. } = &l.stands[0] else {
            panic!("expected deck shape");
        };
        assert_eq!(*rank, 1);
        assert_eq!(rect.width, config.field_width);
        assert_eq!(rect.height, config.stand_depth);
        // Flush against the field, separated by one padding
        assert_eq!(rect.bottom() + config.padding, l.field.y);
        // Field pushed down by padding + stand + padding
        assert_eq!(l.field.y, 2.0 * config.padding + config.stand_depth);
    }

    #[test]
    fn test_adding_second_deck_grows_top_offset_by_one_pitch() {
        let config = cfg();
        let one = vec![stand("Norte", Orientation::N, DeckType::Deck1)];
        let two = vec![
            stand("Norte", Orientation::N, DeckType::Deck1),
            stand("Norte Alta", Orientation::N, DeckType::Deck2),
        ];
        let l1 = layout(&one, &config);
        let l2 = layout(&two, &config);

        assert_eq!(l2.field.y - l1.field.y, config.deck_pitch());

        // The second deck sits entirely above the first
        let r1 = l2.stands[0].bounds();
        let r2 = l2.stands[1].bounds();
        assert!(r2.bottom() <= r1.y);
        assert!(!r1.overlaps(&r2));
    }

    #[test]
    fn test_three_ranks_never_overlap() {
        let config = cfg();
        let stands = vec![
            stand("E1", Orientation::E, DeckType::Deck1),
            stand("E2", Orientation::E, DeckType::Deck2),
            stand("E3", Orientation::E, DeckType::Deck3),
        ];
        let l = layout(&stands, &config);
        assert_eq!(l.stands.len(), 3);
        for i in 0..3 {
            for j in (i + 1)..3 {
                assert!(
                    !l.stands[i].bounds().overlaps(&l.stands[j].bounds()),
                    "ranks {i} and {j} overlap"
                );
            }
        }
        // Stacking offsets strictly increase with rank
        let xs: Vec<f32> = l.stands.iter().map(|s| s.bounds().x).collect();
        assert!(xs[0] < xs[1] && xs[1] < xs[2]);
    }

    #[test]
    fn test_sides_are_independent() {
        let config = cfg();
        let north_only = vec![stand("N3", Orientation::N, DeckType::Deck3)];
        let both = vec![
            stand("N3", Orientation::N, DeckType::Deck3),
            stand("S1", Orientation::S, DeckType::Deck1),
        ];
        let a = layout(&north_only, &config);
        let b = layout(&both, &config);
        // Adding a south stand must not move the field down
        assert_eq!(a.field.y, b.field.y);
    }

    #[test]
    fn test_malformed_stand_skipped_without_affecting_others() {
        let config = cfg();
        let mut corner = stand("Codo", Orientation::E, DeckType::CornerNorth);
        corner.sectors.clear(); // no sectors -> skipped
        let stands = vec![stand("Norte", Orientation::N, DeckType::Deck1), corner];
        let l = layout(&stands, &config);
        assert_eq!(l.stands.len(), 1);
        assert_eq!(l.stands[0].name(), "Norte");
        // The skipped corner reserves no space either
        let baseline = layout(&[stand("Norte", Orientation::N, DeckType::Deck1)], &config);
        assert_eq!(l.canvas_width, baseline.canvas_width);
        assert_eq!(l.canvas_height, baseline.canvas_height);
    }

    #[test]
    fn test_corner_wedge_lands_in_top_left() {
        let config = cfg();
        let stands = vec![stand("Codo NO", Orientation::W, DeckType::CornerNorth)];
        let l = layout(&stands, &config);
        let StandShape::Corner { quadrant, bounds, .. } = &l.stands[0] else {
            panic!("expected corner shape");
        };
        assert_eq!(*quadrant, CornerQuadrant::NorthWest);
        assert_eq!(bounds.right() + config.padding, l.field.x);
        assert_eq!(bounds.bottom() + config.padding, l.field.y);
        // The reservation moved the field in both axes
        assert_eq!(l.field.x, config.padding + config.corner_size + config.padding);
    }

    #[test]
    fn test_corner_wedge_points_stay_inside_bounds() {
        let config = cfg();
        for (o, d) in [
            (Orientation::W, DeckType::CornerNorth),
            (Orientation::E, DeckType::CornerNorth),
            (Orientation::W, DeckType::CornerSouth),
            (Orientation::E, DeckType::CornerSouth),
        ] {
            let l = layout(&[stand("Codo", o, d)], &config);
            let StandShape::Corner { points, bounds, .. } = &l.stands[0] else {
                panic!("expected corner shape");
            };
            for p in points {
                assert!(bounds.contains(*p), "{p:?} outside {bounds:?}");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let config = cfg();
        let stands = vec![
            stand("Norte", Orientation::N, DeckType::Deck1),
            stand("Sur", Orientation::S, DeckType::Deck2),
            stand("Codo", Orientation::E, DeckType::CornerSouth),
        ];
        let a = layout(&stands, &config);
        let b = layout(&stands, &config);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_canvas_growth_is_monotonic() {
        let config = cfg();
        let additions = [
            stand("N1", Orientation::N, DeckType::Deck1),
            stand("S2", Orientation::S, DeckType::Deck2),
            stand("W1", Orientation::W, DeckType::Deck1),
            stand("E3", Orientation::E, DeckType::Deck3),
            stand("Codo NO", Orientation::W, DeckType::CornerNorth),
            stand("Codo SE", Orientation::E, DeckType::CornerSouth),
        ];
        let mut stands: Vec<Stand> = Vec::new();
        let mut prev = layout(&stands, &config);
        for add in additions {
            stands.push(add);
            let next = layout(&stands, &config);
            assert!(next.canvas_width >= prev.canvas_width);
            assert!(next.canvas_height >= prev.canvas_height);
            prev = next;
        }
    }

    #[test]
    fn test_hit_test_finds_stand() {
        let config = cfg();
        let stands = vec![stand("Norte", Orientation::N, DeckType::Deck1)];
        let l = layout(&stands, &config);
        let center = l.stands[0].bounds().center();
        assert_eq!(l.hit_test(center).unwrap().name(), "Norte");
        assert!(l.hit_test(Point { x: -5.0, y: -5.0 }).is_none());
    }
}
