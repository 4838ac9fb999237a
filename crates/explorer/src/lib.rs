//! Explorer crate for the venue discovery front end.
//!
//! This crate contains the orchestrator that turns page state into the
//! filtered list, recommendations and selection a page renders.

pub mod orchestrator;

pub use orchestrator::{DiscoveryView, ExploreState, Explorer};
