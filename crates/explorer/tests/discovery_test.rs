//! End-to-end tests of the discovery flow over the bundled catalog.

use std::sync::Arc;

use catalog::{Personality, VenueCatalog};
use engine::{FilterSpec, composite_score};
use explorer::{ExploreState, Explorer};

fn explorer() -> Explorer {
    Explorer::new(Arc::new(VenueCatalog::seed().unwrap()))
}

#[test]
fn test_default_state_lists_whole_catalog() {
    let explorer = explorer();
    let view = explorer.view(&ExploreState::default()).unwrap();

    assert_eq!(view.places.len(), explorer.catalog().len());
    assert_eq!(view.recommendations.len(), explorer.recommendation_limit());
    assert!(view.selected.is_none());

    for pair in view.places.windows(2) {
        assert!(pair[0].virality_score >= pair[1].virality_score);
    }
    for pair in view.recommendations.windows(2) {
        assert!(composite_score(pair[0]) >= composite_score(pair[1]));
    }
}

#[test]
fn test_state_from_json() {
    let state: ExploreState = serde_json::from_str(
        r#"{
            "filters": {
                "categories": ["Cafe"],
                "facilities": ["WiFi"],
                "personalityTypes": ["Introvert"]
            },
            "searchQuery": "coffee",
            "selected": 1
        }"#,
    )
    .unwrap();

    let explorer = explorer();
    let view = explorer.view(&state).unwrap();

    assert!(!view.places.is_empty());
    for venue in &view.places {
        assert_eq!(venue.category, "Cafe");
        assert!(venue.facilities.contains("WiFi"));
        assert!(venue.personality_match.contains(&Personality::Introvert));
    }
    assert_eq!(view.selected.map(|v| v.id), Some(1));
}

#[test]
fn test_contradictory_filters_show_no_results() {
    let explorer = explorer();
    let state = ExploreState {
        filters: FilterSpec::new().with_price_range(4, 1),
        ..Default::default()
    };

    let view = explorer.view(&state).unwrap();
    assert!(view.places.is_empty());
    assert!(view.recommendations.is_empty());
}
