//! Filter engine entry points.
//!
//! `filter_venues` applies a `FilterSpec`; `search_venues` is the free-text
//! pass callers run afterwards; `sort_by_virality` orders the trending list.
//! All three are pure and never fail.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::SearchFilter;
use crate::spec::FilterSpec;
use crate::traits::VenueFilter;
use catalog::Venue;

/// Keep the venues that satisfy every constraint in `spec`.
///
/// The result is an order-preserving subsequence of `venues`. Contradictory
/// constraints (an inverted range, an unknown category) simply produce an
/// empty result.
///
/// ```ignore
/// let cafes = filter_venues(catalog.venues(), &FilterSpec::new().with_categories(["Cafe"]));
/// ```
pub fn filter_venues<'a, I>(venues: I, spec: &FilterSpec) -> Vec<&'a Venue>
where
    I: IntoIterator<Item = &'a Venue>,
{
    FilterPipeline::for_filter_spec(spec).apply(venues)
}

/// Narrow an already filtered list by free text.
///
/// Case-insensitive substring match on name, location or description.
pub fn search_venues<'a>(venues: Vec<&'a Venue>, query: &str) -> Vec<&'a Venue> {
    let filter = SearchFilter::new(query);
    if filter.is_blank() {
        return venues;
    }
    filter.apply(venues)
}

/// Order venues by virality score, highest first.
///
/// The sort is stable, so equally viral venues keep their relative order.
pub fn sort_by_virality(venues: &mut [&Venue]) {
    venues.sort_by(|a, b| b.virality_score.total_cmp(&a.virality_score));
}
