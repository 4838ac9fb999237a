//! Filter on venue category.

use crate::traits::VenueFilter;
use catalog::Venue;
use std::collections::BTreeSet;

/// Keeps venues whose category is one of the accepted categories.
///
/// An empty set accepts every venue. Category labels compare exactly.
pub struct CategoryFilter {
    categories: BTreeSet<String>,
}

impl CategoryFilter {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Equality test against a single category
    pub fn single(category: impl Into<String>) -> Self {
        Self::new([category.into()])
    }
}

impl VenueFilter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn matches(&self, venue: &Venue) -> bool {
        self.categories.is_empty() || self.categories.contains(&venue.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venues() -> Vec<Venue> {
        vec![
            Venue::new(1, "Kurasu Coffee", "Cafe", 4.8, 95.0, 2),
            Venue::new(2, "Skye", "Bar", 4.5, 91.0, 4),
            Venue::new(3, "Taman Langsat", "Park", 4.4, 72.0, 1),
        ]
    }

    #[test]
    fn test_category_filter() {
        let venues = venues();
        let filter = CategoryFilter::new(["Cafe", "Park"]);
        let filtered = filter.apply(venues.iter().collect());

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(filtered[1].id, 3);
    }

    #[test]
    fn test_empty_category_set_keeps_everything() {
        let venues = venues();
        let filter = CategoryFilter::new(Vec::<String>::new());
        assert_eq!(filter.apply(venues.iter().collect()).len(), 3);
    }

    #[test]
    fn test_category_match_is_exact() {
        let venues = venues();
        let filter = CategoryFilter::single("cafe");
        assert!(filter.apply(venues.iter().collect()).is_empty());
    }
}
