//! Free-text search filters.
//!
//! Search is applied by callers after the constraint filters, so it narrows
//! an already filtered list.

use crate::traits::VenueFilter;
use catalog::Venue;

/// Case-insensitive substring search over name, location and description.
///
/// A venue matches if any one of the three fields contains the query. Only
/// the empty query matches everything; whitespace is searched for as typed.
pub struct SearchFilter {
    query: String,
}

impl SearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_lowercase(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.query.is_empty()
    }
}

impl VenueFilter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn matches(&self, venue: &Venue) -> bool {
        self.is_blank()
            || venue.name.to_lowercase().contains(&self.query)
            || venue.location.to_lowercase().contains(&self.query)
            || venue.description.to_lowercase().contains(&self.query)
    }
}

/// Case-insensitive substring match on the venue location only
pub struct LocationFilter {
    needle: String,
}

impl LocationFilter {
    pub fn new(location: &str) -> Self {
        Self {
            needle: location.trim().to_lowercase(),
        }
    }
}

impl VenueFilter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn matches(&self, venue: &Venue) -> bool {
        venue.location.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venues() -> Vec<Venue> {
        vec![
            Venue::new(1, "Kurasu Coffee", "Cafe", 4.8, 95.0, 2)
                .with_location("Kemang, Jakarta Selatan")
                .with_description("Japanese-style coffee shop"),
            Venue::new(2, "Lucky Cat", "Restaurant", 4.6, 88.0, 3)
                .with_location("Senopati, Jakarta Selatan")
                .with_description("Asian fusion with cat theme"),
            Venue::new(3, "Skye", "Bar", 4.5, 91.0, 4)
                .with_location("Thamrin, Jakarta Pusat")
                .with_description("Rooftop cocktails"),
        ]
    }

    #[test]
    fn test_search_any_field_case_insensitive() {
        let venues = venues();

        let by_name = SearchFilter::new("KURASU").apply(venues.iter().collect());
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 1);

        let by_location = SearchFilter::new("selatan").apply(venues.iter().collect());
        assert_eq!(by_location.len(), 2);

        let by_description = SearchFilter::new("Cocktails").apply(venues.iter().collect());
        assert_eq!(by_description[0].id, 3);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let venues = venues();
        let filter = SearchFilter::new("");
        assert!(filter.is_blank());
        assert_eq!(filter.apply(venues.iter().collect()).len(), 3);
    }

    #[test]
    fn test_whitespace_query_is_searched_as_typed() {
        let venues = venues();
        let filter = SearchFilter::new("   ");
        assert!(!filter.is_blank());
        assert!(filter.apply(venues.iter().collect()).is_empty());

        // Surrounding spaces are part of the needle
        let padded = SearchFilter::new(" kemang").apply(venues.iter().collect());
        assert!(padded.is_empty());
        let inner = SearchFilter::new(" jakarta").apply(venues.iter().collect());
        assert_eq!(inner.len(), 3);
    }

    #[test]
    fn test_location_filter_ignores_other_fields() {
        let venues = venues();
        // "cat" appears in a name and a description but no location
        assert!(LocationFilter::new("cat").apply(venues.iter().collect()).is_empty());
        assert_eq!(LocationFilter::new("senopati").apply(venues.iter().collect()).len(), 1);
    }
}
