// src/tests/router_tests/load_tests.rs

use crate::tests::utils::{
    get, get_page, loaded_state, marker_ids, wait_for_ready, FlakySource,
};
use std::sync::Arc;

#[test]
fn failed_load_shows_retry_and_empty_views() {
    let state = loaded_state(Arc::new(FlakySource::failing_first(1)));

    let body = get_page(&state);
    assert!(body.contains("Listings could not be loaded."));
    assert!(body.contains("Network error: connection refused"));
    assert!(body.contains(r#"href="/retry""#));
    assert!(!body.contains("Updated "));
    assert!(body.contains("0 properties"));
    assert!(marker_ids(&state).is_empty());
}

#[test]
fn retry_repopulates_with_unchanged_filters() {
    let state = loaded_state(Arc::new(FlakySource::failing_first(1)));
    get(&state, "/filters?beds=1");

    let resp = get(&state, "/retry");
    assert_eq!(resp.status(), 302);
    wait_for_ready(&state);

    assert_eq!(marker_ids(&state), vec![2, 4]);
    let body = get_page(&state);
    assert!(!body.contains("Listings could not be loaded."));
    assert!(body.contains("2 properties"));
}

#[test]
fn selection_survives_reload_that_still_has_the_listing() {
    let state = loaded_state(Arc::new(FlakySource::failing_first(0)));
    get(&state, "/select/1");

    get(&state, "/retry");
    wait_for_ready(&state);
    assert!(get_page(&state).contains("id=\"detail\""));
}
