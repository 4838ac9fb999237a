//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the FilterPipeline struct that chains filters
//! together using the builder pattern, plus constructors that translate a
//! `FilterSpec` or `RecommendationSpec` into the matching chain.

use crate::filters::*;
use crate::spec::{FilterSpec, RecommendationSpec};
use crate::traits::VenueFilter;
use catalog::Venue;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// A venue survives the pipeline iff every filter matches it, so the chain
/// is a pure conjunction and filter order never changes the result.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CategoryFilter::new(["Cafe"]))
///     .add_filter(FacilitiesFilter::new(["WiFi", "AC"]));
///
/// let filtered = pipeline.apply(catalog.venues());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn VenueFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl VenueFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Add a filter only when the constraint is present
    pub fn add_optional(self, filter: Option<impl VenueFilter + 'static>) -> Self {
        match filter {
            Some(filter) => self.add_filter(filter),
            None => self,
        }
    }

    /// Pipeline for the filter panel constraints.
    ///
    /// Empty sets are skipped; both ranges always apply.
    pub fn for_filter_spec(spec: &FilterSpec) -> Self {
        Self::new()
            .add_optional(
                (!spec.categories.is_empty()).then(|| CategoryFilter::new(spec.categories.iter().cloned())),
            )
            .add_optional(
                (!spec.facilities.is_empty()).then(|| FacilitiesFilter::new(spec.facilities.iter().cloned())),
            )
            .add_filter(ViralityFilter::new(spec.virality_range))
            .add_filter(PriceFilter::new(spec.price_range))
            .add_optional(
                (!spec.personality_types.is_empty())
                    .then(|| PersonalityFilter::new(spec.personality_types.iter().copied())),
            )
    }

    /// Pipeline for the hard constraints of a recommendation request.
    ///
    /// Only the constraints that are present become filters.
    pub fn for_recommendation_spec(spec: &RecommendationSpec) -> Self {
        let category = spec
            .category
            .as_deref()
            .filter(|category| !category.is_empty())
            .map(CategoryFilter::single);
        let facilities = (!spec.facilities.is_empty())
            .then(|| FacilitiesFilter::new(spec.facilities.iter().cloned()));
        let virality = (spec.min_virality.is_some() || spec.max_virality.is_some())
            .then(|| ViralityFilter::between(spec.min_virality, spec.max_virality));
        let price = (spec.min_price.is_some() || spec.max_price.is_some())
            .then(|| PriceFilter::between(spec.min_price, spec.max_price));
        let location = spec
            .location
            .as_deref()
            .filter(|location| !location.trim().is_empty())
            .map(LocationFilter::new);

        Self::new()
            .add_optional(category)
            .add_optional(facilities)
            .add_optional(virality)
            .add_optional(price)
            .add_optional(spec.personality.map(PersonalityFilter::single))
            .add_optional(location)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the venues.
    ///
    /// ## Algorithm
    /// 1. Start with the input venues, in their given order
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply<'a, I>(&self, venues: I) -> Vec<&'a Venue>
    where
        I: IntoIterator<Item = &'a Venue>,
    {
        let mut current: Vec<&'a Venue> = venues.into_iter().collect();
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Personality;

    fn venues() -> Vec<Venue> {
        vec![
            Venue::new(1, "Kurasu Coffee", "Cafe", 4.8, 95.0, 2)
                .with_facilities(["WiFi", "AC"])
                .with_personalities([Personality::Introvert])
                .with_location("Kemang"),
            Venue::new(2, "Skye", "Bar", 4.5, 91.0, 4)
                .with_facilities(["Cocktails"])
                .with_personalities([Personality::Extrovert])
                .with_location("Thamrin"),
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let venues = venues();
        let pipeline = FilterPipeline::new();

        let filtered = pipeline.apply(&venues);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let venues = venues();
        let pipeline = FilterPipeline::new().add_filter(CategoryFilter::single("Bar"));

        let filtered = pipeline.apply(&venues);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_filter_spec_skips_empty_sets() {
        let pipeline = FilterPipeline::for_filter_spec(&FilterSpec::default());
        // Only the two range filters
        assert_eq!(pipeline.len(), 2);

        let spec = FilterSpec::new()
            .with_categories(["Cafe"])
            .with_facilities(["WiFi"])
            .with_personality_types([Personality::Introvert]);
        assert_eq!(FilterPipeline::for_filter_spec(&spec).len(), 5);
    }

    #[test]
    fn test_recommendation_spec_only_present_constraints() {
        assert!(FilterPipeline::for_recommendation_spec(&RecommendationSpec::default()).is_empty());

        let spec = RecommendationSpec::new()
            .with_category("")
            .with_location("  ")
            .with_price(Some(2), None);
        assert_eq!(FilterPipeline::for_recommendation_spec(&spec).len(), 1);

        let venues = venues();
        let spec = RecommendationSpec::new().with_location("kemang");
        let filtered = FilterPipeline::for_recommendation_spec(&spec).apply(&venues);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }
}
