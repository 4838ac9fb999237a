//! Parser for venue catalog documents.
//!
//! A catalog document is a JSON array of venue objects with camelCase keys:
//!
//! ```json
//! [{ "id": 1, "name": "Kurasu Coffee", "category": "Cafe", "rating": 4.8,
//!    "viralityScore": 95, "priceRange": 2, "facilities": ["WiFi"],
//!    "personalityMatch": ["Introvert"] }]
//! ```
//!
//! Parsing only checks shape. Catalog invariants (unique ids, price tiers)
//! are checked by `VenueCatalog::validate`.

use crate::error::{CatalogError, Result};
use crate::types::Venue;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a catalog document from a string
pub fn parse_venues_str(content: &str) -> Result<Vec<Venue>> {
    let venues: Vec<Venue> = serde_json::from_str(content)?;
    Ok(venues)
}

/// Parse a catalog document from a file
pub fn parse_venues(path: &Path) -> Result<Vec<Venue>> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(err),
    })?;
    parse_venues_str(&content)
}
