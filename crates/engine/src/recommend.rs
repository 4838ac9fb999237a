//! Recommendation engine.
//!
//! Applies the hard constraints of a `RecommendationSpec`, scores the
//! survivors, and returns the top `limit` venues.

use crate::filter_pipeline::FilterPipeline;
use crate::spec::RecommendationSpec;
use catalog::Venue;
use tracing::debug;

/// Weight of the virality score in the composite score
pub const VIRALITY_WEIGHT: f64 = 0.6;

/// Weight of the star rating in the composite score
pub const RATING_WEIGHT: f64 = 0.4;

/// Number of suggestions shown next to the trending list
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 6;

/// `virality_score * 0.6 + rating * 0.4`
pub fn composite_score(venue: &Venue) -> f64 {
    venue.virality_score * VIRALITY_WEIGHT + venue.rating * RATING_WEIGHT
}

/// A recommended venue together with the score it was ranked by
#[derive(Debug, Clone, Copy)]
pub struct ScoredVenue<'a> {
    pub venue: &'a Venue,
    pub score: f64,
}

/// Rank venues against `spec` and keep the best `limit`.
///
/// ## Algorithm
/// 1. Apply every present constraint as a hard filter
/// 2. Score survivors with `composite_score`
/// 3. Stable sort, highest score first, so ties keep their input order
/// 4. Truncate to `limit`
///
/// Fewer survivors than `limit` returns all of them; `limit == 0` returns
/// nothing.
pub fn rank<'a, I>(venues: I, spec: &RecommendationSpec, limit: usize) -> Vec<ScoredVenue<'a>>
where
    I: IntoIterator<Item = &'a Venue>,
{
    if limit == 0 {
        return Vec::new();
    }

    let survivors = FilterPipeline::for_recommendation_spec(spec).apply(venues);
    let mut scored: Vec<ScoredVenue<'a>> = survivors
        .into_iter()
        .map(|venue| ScoredVenue {
            venue,
            score: composite_score(venue),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    debug!(
        "Ranked {} venues, keeping top {}",
        scored.len(),
        limit.min(scored.len())
    );
    scored.truncate(limit);
    scored
}

/// Top `limit` venues for `spec`, best first
pub fn recommend<'a, I>(venues: I, spec: &RecommendationSpec, limit: usize) -> Vec<&'a Venue>
where
    I: IntoIterator<Item = &'a Venue>,
{
    rank(venues, spec, limit)
        .into_iter()
        .map(|scored| scored.venue)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Personality;

    fn venues() -> Vec<Venue> {
        vec![
            Venue::new(1, "Kurasu Coffee", "Cafe", 4.8, 95.0, 2)
                .with_facilities(["WiFi"])
                .with_personalities([Personality::Introvert]),
            Venue::new(2, "Night Bar", "Bar", 4.0, 60.0, 3)
                .with_personalities([Personality::Extrovert]),
        ]
    }

    #[test]
    fn test_composite_score() {
        let venues = venues();
        assert!((composite_score(&venues[0]) - 58.92).abs() < 1e-9);
        assert!((composite_score(&venues[1]) - 37.6).abs() < 1e-9);
    }

    #[test]
    fn test_composite_score_keeps_catalog_precision() {
        let venue = Venue::new(7, "Decimal Cafe", "Cafe", 4.7, 88.3, 2);
        // 88.3 * 0.6 + 4.7 * 0.4
        assert!((composite_score(&venue) - 54.86).abs() < 1e-9);
    }

    #[test]
    fn test_recommend_orders_by_score() {
        let venues = venues();
        let ids: Vec<u32> = recommend(&venues, &RecommendationSpec::default(), 2)
            .iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_limit_edge_cases() {
        let venues = venues();
        let spec = RecommendationSpec::default();

        assert!(recommend(&venues, &spec, 0).is_empty());
        assert_eq!(recommend(&venues, &spec, 1).len(), 1);
        // No padding when fewer survive than requested
        assert_eq!(recommend(&venues, &spec, 10).len(), 2);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let venues = vec![
            Venue::new(5, "First", "Cafe", 4.0, 50.0, 2),
            Venue::new(3, "Second", "Cafe", 4.0, 50.0, 2),
            Venue::new(9, "Third", "Cafe", 4.0, 50.0, 2),
        ];
        let ids: Vec<u32> = recommend(&venues, &RecommendationSpec::default(), 3)
            .iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![5, 3, 9]);
    }

    #[test]
    fn test_hard_constraints_applied() {
        let venues = venues();

        let spec = RecommendationSpec::new().with_personality(Personality::Extrovert);
        let ranked = rank(&venues, &spec, 6);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].venue.id, 2);

        let spec = RecommendationSpec::new().with_category("Cafe").with_facilities(["WiFi", "AC"]);
        assert!(recommend(&venues, &spec, 6).is_empty());

        let spec = RecommendationSpec::new().with_virality(Some(61.0), None);
        assert_eq!(recommend(&venues, &spec, 6)[0].id, 1);
    }
}
