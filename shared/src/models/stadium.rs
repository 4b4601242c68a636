//! Stadium Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Sector, Stand};

/// How a venue sells access: individually numbered seats or whole zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationType {
    /// Individually numbered seats, laid out as stands/sectors/rows
    Numerated,
    /// Zone-based general admission over a background map image
    Sectorized,
}

/// Stadium aggregate
///
/// Exclusively owns its nested Stand/Sector/Row structure; the
/// segmentation type is immutable after creation. `stands` is populated
/// for numerated venues, `sectors` + `image` for sectorized ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stadium {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub segmentation: SegmentationType,
    /// Background map image URL (sectorized venues)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Stands (numerated venues)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stands: Option<Vec<Stand>>,
    /// Top-level sectors (sectorized venues)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sectors: Option<Vec<Sector>>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Stadium {
    /// Stands slice, empty for sectorized venues
    pub fn stands(&self) -> &[Stand] {
        self.stands.as_deref().unwrap_or(&[])
    }
}

/// Create stadium payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StadiumCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    pub segmentation: SegmentationType,
    pub image: Option<String>,
    pub stands: Option<Vec<Stand>>,
    pub sectors: Option<Vec<Sector>>,
}

/// Update stadium payload
///
/// Carries the segmentation type only so the server can reject an
/// attempted change; it is never applied.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StadiumUpdate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub segmentation: Option<SegmentationType>,
    pub image: Option<String>,
    pub stands: Option<Vec<Stand>>,
    pub sectors: Option<Vec<Sector>>,
}
