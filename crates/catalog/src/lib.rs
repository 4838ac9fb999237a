//! # Catalog Crate
//!
//! This crate owns the venue data: the record types, JSON ingestion, and the
//! validation that guards the catalog invariants before the filtering engine
//! ever sees a venue.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Venue, Personality, VenueCatalog)
//! - **parser**: Parse JSON catalog documents into Rust structs
//! - **index**: Build and validate catalogs, including the built-in seed
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::VenueCatalog;
//! use std::path::Path;
//!
//! let catalog = VenueCatalog::load_from_file(Path::new("data/places.json"))?;
//! let cafes: Vec<_> = catalog.venues_in_category("Cafe").collect();
//! println!("{} of {} venues are cafes", cafes.len(), catalog.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{CatalogError, Result};
pub use types::{
    Coordinates,
    Personality,
    SocialStats,
    Trending,
    UnknownPersonality,
    Venue,
    VenueCatalog,
    VenueId,
    MAX_PRICE_TIER,
    MIN_PRICE_TIER,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = VenueCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
        assert!(catalog.facilities().is_empty());
    }

    #[test]
    fn test_insert_venue() {
        let mut catalog = VenueCatalog::new();
        catalog.insert_venue(
            Venue::new(1, "Kurasu Coffee", "Cafe", 4.8, 95.0, 2)
                .with_facilities(["WiFi", "AC"])
                .with_personalities([Personality::Introvert]),
        );
        catalog.insert_venue(Venue::new(2, "Lucky Cat", "Restaurant", 4.6, 88.0, 3));

        let retrieved = catalog.get_venue(1).unwrap();
        assert_eq!(retrieved.name, "Kurasu Coffee");
        assert_eq!(retrieved.facilities.len(), 2);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.categories(), vec!["Cafe", "Restaurant"]);
        assert_eq!(catalog.facilities().into_iter().collect::<Vec<_>>(), vec!["AC", "WiFi"]);
    }

    #[test]
    fn test_venues_in_category_keeps_catalog_order() {
        let catalog: VenueCatalog = vec![
            Venue::new(10, "First", "Cafe", 4.0, 10.0, 1),
            Venue::new(11, "Park", "Park", 4.0, 10.0, 1),
            Venue::new(12, "Second", "Cafe", 4.0, 10.0, 1),
        ]
        .into_iter()
        .collect();

        let ids: Vec<VenueId> = catalog.venues_in_category("Cafe").map(|v| v.id).collect();
        assert_eq!(ids, vec![10, 12]);
        assert_eq!(catalog.venues_in_category("Mall").count(), 0);
    }

    #[test]
    fn test_empty_queries() {
        let catalog = VenueCatalog::new();
        assert!(catalog.get_venue(999).is_none());
        assert!(catalog.venues().is_empty());
    }

    #[test]
    fn test_personality_parsing() {
        assert_eq!("introvert".parse::<Personality>(), Ok(Personality::Introvert));
        assert_eq!("Ekstrovert".parse::<Personality>(), Ok(Personality::Extrovert));
        assert_eq!(" Ambivert ".parse::<Personality>(), Ok(Personality::Ambivert));
        assert!("Omnivert".parse::<Personality>().is_err());
        assert_eq!(Personality::Extrovert.to_string(), "Extrovert");
    }

    #[test]
    fn test_facility_and_personality_helpers() {
        let venue = Venue::new(1, "A", "Cafe", 4.0, 50.0, 2)
            .with_facilities(["WiFi", "AC"])
            .with_personalities([Personality::Introvert]);

        let wanted: Vec<String> = vec!["WiFi".into(), "AC".into()];
        assert!(venue.has_all_facilities(&wanted));
        let wanted: Vec<String> = vec!["WiFi".into(), "Parking".into()];
        assert!(!venue.has_all_facilities(&wanted));

        assert!(venue.suits_any(&[Personality::Extrovert, Personality::Introvert]));
        assert!(!venue.suits_any(&[Personality::Ambivert]));
    }
}
