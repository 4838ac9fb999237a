//! Filter on personality fit.

use crate::traits::VenueFilter;
use catalog::{Personality, Venue};
use std::collections::BTreeSet;

/// Keeps venues suited to at least one accepted personality.
///
/// ## Algorithm
/// OR semantics, unlike facilities: the venue's personality set only has to
/// intersect the accepted set. An empty accepted set keeps every venue.
pub struct PersonalityFilter {
    accepted: BTreeSet<Personality>,
}

impl PersonalityFilter {
    pub fn new(accepted: impl IntoIterator<Item = Personality>) -> Self {
        Self {
            accepted: accepted.into_iter().collect(),
        }
    }

    /// Membership test for a single personality
    pub fn single(personality: Personality) -> Self {
        Self::new([personality])
    }
}

impl VenueFilter for PersonalityFilter {
    fn name(&self) -> &str {
        "PersonalityFilter"
    }

    fn matches(&self, venue: &Venue) -> bool {
        self.accepted.is_empty() || venue.suits_any(&self.accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_personality_matches() {
        let venue = Venue::new(1, "Quiet Cafe", "Cafe", 4.0, 50.0, 2)
            .with_personalities([Personality::Introvert]);

        let filter = PersonalityFilter::new([Personality::Introvert, Personality::Extrovert]);
        assert!(filter.matches(&venue));

        let filter = PersonalityFilter::single(Personality::Extrovert);
        assert!(!filter.matches(&venue));
    }

    #[test]
    fn test_untagged_venue() {
        let venue = Venue::new(1, "Untagged", "Mall", 4.0, 50.0, 2);

        assert!(PersonalityFilter::new([]).matches(&venue));
        assert!(!PersonalityFilter::single(Personality::Ambivert).matches(&venue));
    }
}
