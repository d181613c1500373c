// src/tests/router_tests/selection_tests.rs

use crate::errors::ServerError;
use crate::tests::utils::{
    get, get_json, get_page, highlighted_markers, init_test_state, try_get,
};

#[test]
fn list_click_highlights_marker_and_card() {
    let state = init_test_state();

    let resp = get(&state, "/select/3");
    assert_eq!(resp.status(), 302);

    assert_eq!(highlighted_markers(&state), vec![3]);

    let body = get_page(&state);
    assert_eq!(body.matches("listing-card selected").count(), 1);
    assert!(body.contains("id=\"detail\""));
    assert!(body.contains("Spacious Castro district home"));
    assert!(body.contains(r#"data-selected="3""#));
}

#[test]
fn marker_and_details_routes_agree() {
    let a = init_test_state();
    let b = init_test_state();

    get(&a, "/select/2");
    get(&b, "/details/2");

    assert_eq!(highlighted_markers(&a), vec![2]);
    assert_eq!(highlighted_markers(&b), vec![2]);
    for state in [&a, &b] {
        let body = get_page(state);
        assert!(body.contains("id=\"detail\""));
        assert!(body.contains("Charming Mission district apartment"));
    }
}

#[test]
fn latest_click_wins_across_views() {
    let state = init_test_state();

    get(&state, "/select/1");
    get(&state, "/select/4");

    assert_eq!(highlighted_markers(&state), vec![4]);
    let body = get_page(&state);
    assert_eq!(body.matches("listing-card selected").count(), 1);
}

#[test]
fn map_hint_centers_on_selection() {
    let state = init_test_state();
    get(&state, "/select/3");

    let payload = get_json(&state, "/map/markers.json");
    assert_eq!(payload["view"]["center"]["latitude"], 37.7609);
    assert_eq!(payload["view"]["center"]["longitude"], -122.4350);
    assert_eq!(payload["view"]["zoom"], 12);
}

#[test]
fn filtering_out_selection_clears_detail_and_highlight() {
    let state = init_test_state();
    get(&state, "/select/2"); // Valencia, 1 bed

    get(&state, "/filters?beds=3");

    assert!(highlighted_markers(&state).is_empty());
    let body = get_page(&state);
    assert!(!body.contains("id=\"detail\""));
    assert!(!body.contains("Charming Mission district apartment"));

    // Clearing the filter does not bring the old selection back.
    get(&state, "/filters/clear");
    assert!(highlighted_markers(&state).is_empty());
}

#[test]
fn unknown_id_keeps_current_selection() {
    let state = init_test_state();
    get(&state, "/select/1");

    let resp = get(&state, "/select/999");
    assert_eq!(resp.status(), 302);

    assert_eq!(highlighted_markers(&state), vec![1]);
}

#[test]
fn hidden_listing_cannot_be_selected() {
    let state = init_test_state();
    get(&state, "/filters?beds=3");

    get(&state, "/select/1");

    assert!(highlighted_markers(&state).is_empty());
}

#[test]
fn dismiss_closes_detail() {
    let state = init_test_state();
    get(&state, "/details/1");
    assert!(get_page(&state).contains("id=\"detail\""));

    get(&state, "/dismiss");

    assert!(!get_page(&state).contains("id=\"detail\""));
    assert!(highlighted_markers(&state).is_empty());
}

#[test]
fn malformed_id_is_a_bad_request() {
    let state = init_test_state();
    let err = try_get(&state, "/select/not-a-number").unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}
