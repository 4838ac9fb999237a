//! # Discovery Orchestrator
//!
//! This module turns the trending page's UI state into what it renders:
//! 1. Apply the filter panel constraints
//! 2. Narrow by the search box text
//! 3. Sort the survivors by virality, highest first
//! 4. Derive recommendations from the same filters
//! 5. Resolve the selected venue, if any
//!
//! Every call recomputes from scratch; nothing is cached between calls.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use catalog::{Venue, VenueCatalog, VenueId};
use engine::{
    DEFAULT_RECOMMENDATION_LIMIT, FilterSpec, RecommendationSpec, filter_venues, recommend,
    search_venues, sort_by_virality,
};

/// UI state of the trending page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExploreState {
    pub filters: FilterSpec,
    pub search_query: String,
    pub selected: Option<VenueId>,
}

impl ExploreState {
    /// Reset the filter panel, keeping search text and selection
    pub fn clear_filters(&mut self) {
        self.filters = FilterSpec::default();
    }
}

/// Everything the trending page renders for one state
#[derive(Debug, Clone)]
pub struct DiscoveryView<'a> {
    /// Filtered, searched, sorted by virality
    pub places: Vec<&'a Venue>,
    /// Ranked suggestions for the current filters
    pub recommendations: Vec<&'a Venue>,
    pub selected: Option<&'a Venue>,
}

/// Main orchestrator shared by every page that lists venues
#[derive(Clone)]
pub struct Explorer {
    catalog: Arc<VenueCatalog>,
    recommendation_limit: usize,
}

impl Explorer {
    /// Create an explorer over a shared catalog
    pub fn new(catalog: Arc<VenueCatalog>) -> Self {
        Self {
            catalog,
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }

    pub fn with_recommendation_limit(mut self, limit: usize) -> Self {
        self.recommendation_limit = limit;
        self
    }

    pub fn catalog(&self) -> &VenueCatalog {
        &self.catalog
    }

    pub fn recommendation_limit(&self) -> usize {
        self.recommendation_limit
    }

    /// The trending list: filter, then search, then sort by virality
    pub fn trending(&self, state: &ExploreState) -> Vec<&Venue> {
        let filtered = filter_venues(self.catalog.venues(), &state.filters);
        debug!("{} venues pass the filter panel", filtered.len());

        let mut places = search_venues(filtered, &state.search_query);
        sort_by_virality(&mut places);
        places
    }

    /// Suggestions for the current filters, at the configured limit
    pub fn recommendations(&self, filters: &FilterSpec) -> Vec<&Venue> {
        self.recommend(&RecommendationSpec::from(filters), self.recommendation_limit)
    }

    /// Suggestions for an explicit recommendation request
    pub fn recommend(&self, spec: &RecommendationSpec, limit: usize) -> Vec<&Venue> {
        recommend(self.catalog.venues(), spec, limit)
    }

    /// Look up a venue the user clicked on
    pub fn select(&self, id: VenueId) -> Result<&Venue> {
        self.catalog
            .get_venue(id)
            .ok_or_else(|| anyhow!("Venue {} not found", id))
    }

    /// Build the full page view for a UI state
    pub fn view(&self, state: &ExploreState) -> Result<DiscoveryView<'_>> {
        let start_time = Instant::now();

        let places = self.trending(state);
        let recommendations = self.recommendations(&state.filters);
        let selected = state
            .selected
            .map(|id| self.select(id))
            .transpose()
            .context("Failed to resolve selected venue")?;

        info!(
            "Built discovery view: {} places, {} recommendations in {:.2?}",
            places.len(),
            recommendations.len(),
            start_time.elapsed()
        );

        Ok(DiscoveryView {
            places,
            recommendations,
            selected,
        })
    }
}
