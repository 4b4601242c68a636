//! Venue configuration validation
//!
//! Validates the nested Stadium structure before it is persisted or handed
//! to the layout engine. All violations are collected into a single
//! [`AppError::validation`] with one detail entry per offending field path,
//! so a form can surface every problem at once and block submission.

use crate::error::{AppError, AppResult};
use crate::models::{Sector, SegmentationType, Stand};

/// Collected field-path violations
#[derive(Debug, Default)]
struct Violations(Vec<(String, String)>);

impl Violations {
    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push((field.into(), message.into()));
    }

    fn into_result(self) -> AppResult<()> {
        if self.0.is_empty() {
            return Ok(());
        }
        let mut err = AppError::validation("Invalid venue configuration");
        for (field, message) in self.0 {
            err = err.with_detail(field, message);
        }
        Err(err)
    }
}

/// Validate a stadium configuration against its segmentation type.
///
/// - `numerated`: at least one stand; every stand needs a name, an
///   orientation, a deck type and at least one sector; every sector needs a
///   non-empty name and at least one row with seats.
/// - `sectorized`: a background map image and at least one named sector.
pub fn validate_configuration(
    segmentation: SegmentationType,
    image: Option<&str>,
    stands: Option<&[Stand]>,
    sectors: Option<&[Sector]>,
) -> AppResult<()> {
    let mut violations = Violations::default();
    match segmentation {
        SegmentationType::Numerated => {
            validate_stands(stands.unwrap_or(&[]), &mut violations);
        }
        SegmentationType::Sectorized => {
            if image.is_none_or(str::is_empty) {
                violations.push("image", "a background map image is required");
            }
            validate_flat_sectors(sectors.unwrap_or(&[]), &mut violations);
        }
    }
    violations.into_result()
}

fn validate_stands(stands: &[Stand], violations: &mut Violations) {
    if stands.is_empty() {
        violations.push("stands", "at least one stand is required");
        return;
    }
    for (i, stand) in stands.iter().enumerate() {
        if stand.name.is_empty() {
            violations.push(format!("stands[{i}].name"), "name is required");
        }
        if stand.orientation.is_none() {
            violations.push(format!("stands[{i}].orientation"), "orientation is required");
        }
        if stand.deck_type.is_none() {
            violations.push(format!("stands[{i}].deckType"), "deck type is required");
        }
        if stand.sectors.is_empty() {
            violations.push(format!("stands[{i}].sectors"), "at least one sector is required");
            continue;
        }
        for (j, sector) in stand.sectors.iter().enumerate() {
            if sector.name.is_empty() {
                violations.push(format!("stands[{i}].sectors[{j}].name"), "name is required");
            }
            if !sector.rows.iter().any(|r| r.seat_count > 0) {
                violations.push(
                    format!("stands[{i}].sectors[{j}].rows"),
                    "at least one row with seats is required",
                );
            }
        }
    }
}

impl crate::models::StadiumCreate {
    /// Validate this payload's nested configuration
    pub fn validate_configuration(&self) -> AppResult<()> {
        validate_configuration(
            self.segmentation,
            self.image.as_deref(),
            self.stands.as_deref(),
            self.sectors.as_deref(),
        )
    }
}

impl crate::models::Stadium {
    /// Validate the stored configuration (e.g. after applying an update)
    pub fn validate_configuration(&self) -> AppResult<()> {
        validate_configuration(
            self.segmentation,
            self.image.as_deref(),
            self.stands.as_deref(),
            self.sectors.as_deref(),
        )
    }
}

fn validate_flat_sectors(sectors: &[Sector], violations: &mut Violations) {
    if sectors.is_empty() {
        violations.push("sectors", "at least one sector is required");
        return;
    }
    for (j, sector) in sectors.iter().enumerate() {
        if sector.name.is_empty() {
            violations.push(format!("sectors[{j}].name"), "name is required");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeckType, Orientation, Row};

    fn stand(name: &str, sectors: Vec<Sector>) -> Stand {
        Stand {
            id: None,
            name: name.to_string(),
            orientation: Some(Orientation::N),
            deck_type: Some(DeckType::Deck1),
            sectors,
        }
    }

    fn sector(name: &str, seats: u32) -> Sector {
        Sector {
            id: None,
            name: name.to_string(),
            rows: vec![Row {
                id: None,
                label: "A".to_string(),
                seat_count: seats,
            }],
        }
    }

    #[test]
    fn test_valid_numerated() {
        let stands = vec![stand("Norte", vec![sector("Baja", 10)])];
        assert!(
            validate_configuration(SegmentationType::Numerated, None, Some(&stands), None).is_ok()
        );
    }

    #[test]
    fn test_numerated_requires_stands() {
        let err = validate_configuration(SegmentationType::Numerated, None, None, None)
            .unwrap_err();
        assert!(err.details.unwrap().contains_key("stands"));
    }

    #[test]
    fn test_numerated_missing_orientation_and_deck() {
        let mut s = stand("Norte", vec![sector("Baja", 10)]);
        s.orientation = None;
        s.deck_type = None;
        let stands = vec![s];
        let err = validate_configuration(SegmentationType::Numerated, None, Some(&stands), None)
            .unwrap_err();
        let details = err.details.unwrap();
        assert!(details.contains_key("stands[0].orientation"));
        assert!(details.contains_key("stands[0].deckType"));
    }

    #[test]
    fn test_numerated_sector_needs_seats() {
        // A sector whose rows are all empty cannot be sold
        let stands = vec![stand("Norte", vec![sector("Baja", 0)])];
        let err = validate_configuration(SegmentationType::Numerated, None, Some(&stands), None)
            .unwrap_err();
        assert!(err.details.unwrap().contains_key("stands[0].sectors[0].rows"));
    }

    #[test]
    fn test_sectorized_missing_image_and_sectors_yields_two_errors() {
        let err = validate_configuration(SegmentationType::Sectorized, None, None, None)
            .unwrap_err();
        let details = err.details.unwrap();
        assert_eq!(details.len(), 2);
        assert!(details.contains_key("image"));
        assert!(details.contains_key("sectors"));
    }

    #[test]
    fn test_sectorized_with_stored_image_url() {
        let sectors = vec![sector("General", 0)];
        assert!(
            validate_configuration(
                SegmentationType::Sectorized,
                Some("/maps/abc.png"),
                None,
                Some(&sectors)
            )
            .is_ok()
        );
    }
}
