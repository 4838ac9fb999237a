//! Filter implementations for the venue engine.
//!
//! Each constraint of a `FilterSpec` or `RecommendationSpec` maps to one of
//! these filters; a FilterPipeline chains them.

pub mod category;
pub mod facilities;
pub mod personality;
pub mod price;
pub mod search;
pub mod virality;

// Re-export for convenience
pub use category::CategoryFilter;
pub use facilities::FacilitiesFilter;
pub use personality::PersonalityFilter;
pub use price::PriceFilter;
pub use search::{LocationFilter, SearchFilter};
pub use virality::ViralityFilter;
