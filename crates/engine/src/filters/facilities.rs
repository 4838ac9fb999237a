//! Filter requiring a set of facilities.

use crate::traits::VenueFilter;
use catalog::Venue;
use std::collections::BTreeSet;

/// Keeps venues that offer every required facility.
///
/// ## Algorithm
/// AND semantics: the venue's facility set must be a superset of the
/// required set. A venue missing any one requested facility is dropped.
pub struct FacilitiesFilter {
    required: BTreeSet<String>,
}

impl FacilitiesFilter {
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
        }
    }
}

impl VenueFilter for FacilitiesFilter {
    fn name(&self) -> &str {
        "FacilitiesFilter"
    }

    fn matches(&self, venue: &Venue) -> bool {
        venue.has_all_facilities(&self.required)
    }
}
