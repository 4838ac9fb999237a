//! Filter on price tier.

use crate::spec::Bounds;
use crate::traits::VenueFilter;
use catalog::Venue;

/// Keeps venues whose price tier lies in an inclusive range.
pub struct PriceFilter {
    range: Bounds<u8>,
}

impl PriceFilter {
    pub fn new(range: Bounds<u8>) -> Self {
        Self { range }
    }

    /// Either end may be open
    pub fn between(min: Option<u8>, max: Option<u8>) -> Self {
        Self::new(Bounds::new(min.unwrap_or(u8::MIN), max.unwrap_or(u8::MAX)))
    }
}

impl VenueFilter for PriceFilter {
    fn name(&self) -> &str {
        "PriceFilter"
    }

    fn matches(&self, venue: &Venue) -> bool {
        self.range.contains(&venue.price_range)
    }
}
