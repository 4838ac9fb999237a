//! Core traits for the filtering engine.
//!
//! This module defines the VenueFilter trait that allows composable,
//! extensible predicates to be applied to venue lists.

use catalog::Venue;

/// Core trait for filtering venues.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets a built pipeline be shared across UI threads
/// - Filters never fail: a constraint that nothing satisfies just yields an
///   empty list
/// - Filters work on borrowed venues, so the catalog is never copied or
///   mutated
pub trait VenueFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Per-venue inclusion test
    fn matches(&self, venue: &Venue) -> bool;

    /// Apply this filter to a list of venues.
    ///
    /// Keeps the venues for which `matches` holds, in their original order.
    fn apply<'a>(&self, venues: Vec<&'a Venue>) -> Vec<&'a Venue> {
        venues
            .into_iter()
            .filter(|venue| self.matches(venue))
            .collect()
    }
}
