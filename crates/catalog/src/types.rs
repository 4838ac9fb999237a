//! Core domain types for the venue catalog.
//!
//! This module defines the records the rest of the workspace reads:
//! - `Venue`, the immutable place entry
//! - `Personality`, the closed set of dispositions a venue can suit
//! - `Trending` and `SocialStats`, display-only buzz indicators
//! - `VenueCatalog`, the in-memory collection with lookup indices

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a venue within a catalog
pub type VenueId = u32;

/// Lowest valid price tier ("$")
pub const MIN_PRICE_TIER: u8 = 1;

/// Highest valid price tier ("$$$$")
pub const MAX_PRICE_TIER: u8 = 4;

// =============================================================================
// Personality
// =============================================================================

/// The user dispositions a venue can be tagged with.
///
/// The set is closed on purpose. Older catalogs spell the second label
/// "Ekstrovert", which is accepted on input and normalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Personality {
    Introvert,
    #[serde(alias = "Ekstrovert")]
    Extrovert,
    Ambivert,
}

impl Personality {
    /// All known personality labels, in display order
    pub const ALL: [Personality; 3] = [
        Personality::Introvert,
        Personality::Extrovert,
        Personality::Ambivert,
    ];

    /// Canonical label for display
    pub fn label(&self) -> &'static str {
        match self {
            Personality::Introvert => "Introvert",
            Personality::Extrovert => "Extrovert",
            Personality::Ambivert => "Ambivert",
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string isn't one of the known personality labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPersonality(pub String);

impl fmt::Display for UnknownPersonality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown personality label: {}", self.0)
    }
}

impl std::error::Error for UnknownPersonality {}

impl FromStr for Personality {
    type Err = UnknownPersonality;

    /// Case-insensitive parse of a personality label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "introvert" => Ok(Personality::Introvert),
            "extrovert" | "ekstrovert" => Ok(Personality::Extrovert),
            "ambivert" => Ok(Personality::Ambivert),
            _ => Err(UnknownPersonality(s.to_string())),
        }
    }
}

// =============================================================================
// Display-only Types
// =============================================================================

/// Direction of a venue's recent buzz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trending {
    Up,
    Stable,
    Down,
}

/// Social channel counters shown on venue cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocialStats {
    pub instagram: u64,
    pub tiktok: u64,
    pub likes: u64,
}

/// Map pin position. Display only, nothing geocodes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

// =============================================================================
// Venue
// =============================================================================

/// A place entry in the catalog.
///
/// Venues are immutable once loaded; the engine only ever borrows them.
/// `category` and `facilities` are open-ended labels, while
/// `personality_match` is restricted to the `Personality` enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub category: String,
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Buzz metric, conventionally 0-100.
    ///
    /// Some catalogs call this `trendScore`; both spellings load here.
    #[serde(alias = "trendScore")]
    pub virality_score: f64,
    /// Price tier, 1 ("$") through 4 ("$$$$")
    pub price_range: u8,
    #[serde(default)]
    pub facilities: BTreeSet<String>,
    #[serde(default)]
    pub personality_match: BTreeSet<Personality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending: Option<Trending>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_stats: Option<SocialStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Venue {
    /// Minimal venue with the required fields set and everything else empty.
    ///
    /// Mostly useful for tests and synthetic catalogs; chain the `with_*`
    /// helpers to fill in the rest.
    pub fn new(
        id: VenueId,
        name: impl Into<String>,
        category: impl Into<String>,
        rating: f64,
        virality_score: f64,
        price_range: u8,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            rating,
            reviews: 0,
            image: None,
            description: String::new(),
            location: String::new(),
            coordinates: None,
            virality_score,
            price_range,
            facilities: BTreeSet::new(),
            personality_match: BTreeSet::new(),
            trending: None,
            social_stats: None,
            open_hours: None,
            phone_number: None,
            website: None,
        }
    }

    pub fn with_facilities<I, S>(mut self, facilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facilities = facilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_personalities(mut self, personalities: impl IntoIterator<Item = Personality>) -> Self {
        self.personality_match = personalities.into_iter().collect();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// True if the venue offers every facility in `required`
    pub fn has_all_facilities<'a>(&self, required: impl IntoIterator<Item = &'a String>) -> bool {
        required
            .into_iter()
            .all(|facility| self.facilities.contains(facility))
    }

    /// True if the venue suits at least one of `accepted`
    pub fn suits_any<'a>(&self, accepted: impl IntoIterator<Item = &'a Personality>) -> bool {
        accepted
            .into_iter()
            .any(|personality| self.personality_match.contains(personality))
    }
}

// =============================================================================
// VenueCatalog - The In-Memory Catalog
// =============================================================================

/// Holds every venue in load order plus lookup indices.
///
/// Load order matters: it is the order filter results preserve and the
/// tie-break order for recommendations. The id and category indices store
/// positions into `venues`.
#[derive(Debug, Default, Clone)]
pub struct VenueCatalog {
    pub(crate) venues: Vec<Venue>,
    pub(crate) id_index: HashMap<VenueId, usize>,
    pub(crate) category_index: HashMap<String, Vec<usize>>,
}

impl VenueCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// All venues in catalog order
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    /// Get a venue by id
    pub fn get_venue(&self, id: VenueId) -> Option<&Venue> {
        self.id_index.get(&id).map(|&pos| &self.venues[pos])
    }

    /// Venues in one category, in catalog order
    pub fn venues_in_category<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a Venue> + use<'a> {
        self.category_index
            .get(category)
            .map(|positions| positions.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&pos| &self.venues[pos])
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.category_index.keys().map(String::as_str).collect();
        categories.sort_unstable();
        categories
    }

    /// Distinct facility labels across the catalog, sorted
    pub fn facilities(&self) -> BTreeSet<&str> {
        self.venues
            .iter()
            .flat_map(|venue| venue.facilities.iter().map(String::as_str))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Append a venue and update the indices.
    ///
    /// A venue whose id is already present replaces the id lookup but both
    /// records stay in `venues`; `validate` reports the duplicate.
    pub fn insert_venue(&mut self, venue: Venue) {
        let pos = self.venues.len();
        self.id_index.insert(venue.id, pos);
        self.category_index
            .entry(venue.category.clone())
            .or_default()
            .push(pos);
        self.venues.push(venue);
    }
}

impl<'a> IntoIterator for &'a VenueCatalog {
    type Item = &'a Venue;
    type IntoIter = std::slice::Iter<'a, Venue>;

    fn into_iter(self) -> Self::IntoIter {
        self.venues.iter()
    }
}

impl FromIterator<Venue> for VenueCatalog {
    fn from_iter<I: IntoIterator<Item = Venue>>(iter: I) -> Self {
        let mut catalog = VenueCatalog::new();
        for venue in iter {
            catalog.insert_venue(venue);
        }
        catalog
    }
}
