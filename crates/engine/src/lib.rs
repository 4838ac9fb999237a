//! Filtering and recommendation engine for venue discovery.
//!
//! This crate provides:
//! - VenueFilter trait and implementations for each constraint
//! - FilterPipeline for composing filters
//! - `filter_venues`, the conjunction of every FilterSpec constraint
//! - `recommend`, scored top-K selection against a RecommendationSpec
//! - Price and personality display labels
//!
//! Everything here is pure: no I/O, no shared state, no errors. The catalog
//! is only borrowed, and results borrow from it.
//!
//! ## Example Usage
//! ```ignore
//! use engine::{filter_venues, recommend, FilterSpec, RecommendationSpec};
//!
//! let spec = FilterSpec::new()
//!     .with_categories(["Cafe"])
//!     .with_facilities(["WiFi", "AC"]);
//! let cafes = filter_venues(catalog.venues(), &spec);
//!
//! let picks = recommend(catalog.venues(), &RecommendationSpec::from(&spec), 6);
//! ```

pub mod traits;
pub mod spec;
pub mod filters;
pub mod filter_pipeline;
pub mod filter;
pub mod recommend;
pub mod labels;

// Re-export main types
pub use traits::VenueFilter;
pub use spec::{Bounds, FilterSpec, RecommendationSpec};
pub use filter_pipeline::FilterPipeline;
pub use filter::{filter_venues, search_venues, sort_by_virality};
pub use recommend::{composite_score, rank, recommend, ScoredVenue, DEFAULT_RECOMMENDATION_LIMIT};
pub use labels::{personality_style_tag, price_label, style_for, BadgeStyle};
