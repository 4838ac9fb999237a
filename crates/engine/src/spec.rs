//! Constraint sets handed to the engine by the presentation layer.
//!
//! Both specs are plain values: built from UI state for a single call and
//! thrown away afterwards.

use catalog::{MAX_PRICE_TIER, MIN_PRICE_TIER, Personality};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// Inclusive `[min, max]` bound.
///
/// An inverted bound (`min > max`) is allowed and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> Bounds<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// True if `value` lies within the bound, inclusive on both ends
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }

    /// True if no value can satisfy the bound
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

/// Default virality bound, `[0, 100]`
pub const DEFAULT_VIRALITY_RANGE: Bounds<f64> = Bounds { min: 0.0, max: 100.0 };

/// Default price bound, every tier
pub const DEFAULT_PRICE_RANGE: Bounds<u8> = Bounds {
    min: MIN_PRICE_TIER,
    max: MAX_PRICE_TIER,
};

/// The hard constraints a user selected in the filter panel.
///
/// Empty sets mean "no constraint", never "match nothing". `Default` is the
/// cleared state. Categories and personalities keep the order they were
/// selected in, without duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    #[serde(deserialize_with = "deserialize_selection")]
    pub categories: Vec<String>,
    /// Every listed facility is required
    pub facilities: BTreeSet<String>,
    pub virality_range: Bounds<f64>,
    pub price_range: Bounds<u8>,
    /// Any one listed personality is enough
    #[serde(deserialize_with = "deserialize_selection")]
    pub personality_types: Vec<Personality>,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            facilities: BTreeSet::new(),
            virality_range: DEFAULT_VIRALITY_RANGE,
            price_range: DEFAULT_PRICE_RANGE,
            personality_types: Vec::new(),
        }
    }
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no filter differs from the cleared state
    pub fn is_unconstrained(&self) -> bool {
        self.categories.is_empty()
            && self.facilities.is_empty()
            && self.personality_types.is_empty()
            && self.virality_range == DEFAULT_VIRALITY_RANGE
            && self.price_range == DEFAULT_PRICE_RANGE
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = dedup_in_order(categories.into_iter().map(Into::into));
        self
    }

    pub fn with_facilities<I, S>(mut self, facilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facilities = facilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_virality_range(mut self, min: f64, max: f64) -> Self {
        self.virality_range = Bounds::new(min, max);
        self
    }

    pub fn with_price_range(mut self, min: u8, max: u8) -> Self {
        self.price_range = Bounds::new(min, max);
        self
    }

    pub fn with_personality_types(mut self, types: impl IntoIterator<Item = Personality>) -> Self {
        self.personality_types = dedup_in_order(types);
        self
    }
}

/// First occurrence wins; later repeats are dropped
fn dedup_in_order<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut selected = Vec::new();
    for item in items {
        if !selected.contains(&item) {
            selected.push(item);
        }
    }
    selected
}

fn deserialize_selection<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + PartialEq,
{
    Vec::<T>::deserialize(deserializer).map(dedup_in_order)
}

/// Looser, single-valued constraints used to rank suggestions.
///
/// Every field is optional. An empty facility set or a blank category or
/// location string counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationSpec {
    pub category: Option<String>,
    pub facilities: BTreeSet<String>,
    pub min_virality: Option<f64>,
    pub max_virality: Option<f64>,
    pub min_price: Option<u8>,
    pub max_price: Option<u8>,
    pub personality: Option<Personality>,
    /// Case-insensitive substring of the venue location
    pub location: Option<String>,
}

impl RecommendationSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_facilities<I, S>(mut self, facilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facilities = facilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_virality(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_virality = min;
        self.max_virality = max;
        self
    }

    pub fn with_price(mut self, min: Option<u8>, max: Option<u8>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_personality(mut self, personality: Personality) -> Self {
        self.personality = Some(personality);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Suggestions shown next to a filtered list use the first selected category
/// and personality, every selected facility, and both ranges.
impl From<&FilterSpec> for RecommendationSpec {
    fn from(filters: &FilterSpec) -> Self {
        Self {
            category: filters.categories.first().cloned(),
            facilities: filters.facilities.clone(),
            min_virality: Some(filters.virality_range.min),
            max_virality: Some(filters.virality_range.max),
            min_price: Some(filters.price_range.min),
            max_price: Some(filters.price_range.max),
            personality: filters.personality_types.first().copied(),
            location: None,
        }
    }
}
