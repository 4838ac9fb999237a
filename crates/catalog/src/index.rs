//! Catalog building and validation.
//!
//! This is the ingestion boundary: documents are parsed, venues indexed, and
//! the catalog invariants checked before anything downstream sees the data.
//! Violations are reported here as data-quality errors so the filtering
//! engine can stay total.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Catalog bundled with the crate
const SEED_CATALOG: &str = include_str!("../data/places.json");

impl VenueCatalog {
    /// Load a catalog document from disk
    ///
    /// Steps:
    /// 1. Parse the JSON document
    /// 2. Index venues in document order
    /// 3. Validate catalog invariants
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading venue catalog from {:?}", path);
        let venues = parser::parse_venues(path)?;
        Self::build(venues)
    }

    /// Load a catalog document from a string
    pub fn load_from_str(content: &str) -> Result<Self> {
        let venues = parser::parse_venues_str(content)?;
        Self::build(venues)
    }

    /// The built-in Jakarta catalog
    pub fn seed() -> Result<Self> {
        Self::load_from_str(SEED_CATALOG)
    }

    fn build(venues: Vec<Venue>) -> Result<Self> {
        let catalog: VenueCatalog = venues.into_iter().collect();
        catalog.validate()?;
        info!(
            "Venue catalog built: {} venues in {} categories",
            catalog.len(),
            catalog.category_index.len()
        );
        Ok(catalog)
    }

    /// Validate catalog invariants
    ///
    /// Errors:
    /// - Two venues with the same id
    /// - Price tier outside 1-4
    /// - Non-finite rating or virality score
    ///
    /// Ratings outside 0-5 are unusual but accepted, and only logged.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.venues.len());
        for venue in &self.venues {
            if !seen.insert(venue.id) {
                return Err(CatalogError::DuplicateId { id: venue.id });
            }
        }

        self.venues.par_iter().try_for_each(validate_venue)
    }
}

fn validate_venue(venue: &Venue) -> Result<()> {
    if !(MIN_PRICE_TIER..=MAX_PRICE_TIER).contains(&venue.price_range) {
        return Err(CatalogError::InvalidValue {
            id: venue.id,
            field: "priceRange".to_string(),
            value: venue.price_range.to_string(),
        });
    }
    if !venue.rating.is_finite() {
        return Err(CatalogError::InvalidValue {
            id: venue.id,
            field: "rating".to_string(),
            value: venue.rating.to_string(),
        });
    }
    if !venue.virality_score.is_finite() {
        return Err(CatalogError::InvalidValue {
            id: venue.id,
            field: "viralityScore".to_string(),
            value: venue.virality_score.to_string(),
        });
    }
    if !(0.0..=5.0).contains(&venue.rating) {
        warn!(
            "Venue {} ({}) has rating {} outside 0-5",
            venue.id, venue.name, venue.rating
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_is_valid() {
        let catalog = VenueCatalog::seed().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.categories().contains(&"Cafe"));
        assert!(catalog.get_venue(1).is_some());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let catalog: VenueCatalog = vec![
            Venue::new(1, "A", "Cafe", 4.0, 50.0, 2),
            Venue::new(1, "B", "Bar", 4.0, 50.0, 2),
        ]
        .into_iter()
        .collect();

        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { id: 1 }));
    }

    #[test]
    fn test_price_tier_out_of_range_rejected() {
        for tier in [0, 5] {
            let catalog: VenueCatalog = std::iter::once(Venue::new(3, "A", "Cafe", 4.0, 50.0, tier)).collect();
            match catalog.validate().unwrap_err() {
                CatalogError::InvalidValue { id, field, .. } => {
                    assert_eq!(id, 3);
                    assert_eq!(field, "priceRange");
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_non_finite_virality_rejected() {
        let catalog: VenueCatalog =
            std::iter::once(Venue::new(1, "A", "Cafe", 4.0, f64::NAN, 2)).collect();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_unusual_rating_accepted() {
        let catalog: VenueCatalog = std::iter::once(Venue::new(1, "A", "Cafe", 7.5, 50.0, 2)).collect();
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_load_from_str_rejects_invalid_catalog() {
        let doc = r#"[{"id": 1, "name": "A", "category": "Cafe", "rating": 4.0,
                       "viralityScore": 10, "priceRange": 9}]"#;
        assert!(VenueCatalog::load_from_str(doc).is_err());
    }
}
