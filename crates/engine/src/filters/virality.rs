//! Filter on virality score.

use crate::spec::Bounds;
use crate::traits::VenueFilter;
use catalog::Venue;

/// Keeps venues whose virality score lies in an inclusive range.
pub struct ViralityFilter {
    range: Bounds<f64>,
}

impl ViralityFilter {
    pub fn new(range: Bounds<f64>) -> Self {
        Self { range }
    }

    /// Either end may be open
    pub fn between(min: Option<f64>, max: Option<f64>) -> Self {
        Self::new(Bounds::new(
            min.unwrap_or(f64::NEG_INFINITY),
            max.unwrap_or(f64::INFINITY),
        ))
    }
}

impl VenueFilter for ViralityFilter {
    fn name(&self) -> &str {
        "ViralityFilter"
    }

    fn matches(&self, venue: &Venue) -> bool {
        self.range.contains(&venue.virality_score)
    }
}
