// src/tests/router_tests/browse_tests.rs

use crate::errors::ServerError;
use crate::tests::utils::{body_string, get, get_page, init_test_state, try_get};

#[test]
fn browse_page_lists_every_sample_listing() {
    let state = init_test_state();

    let resp = get(&state, "/");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Open House Finder"));
    assert!(body.contains("4 properties"));
    for address in [
        "123 Market St",
        "456 Valencia St",
        "789 Castro St",
        "321 Fillmore St",
    ] {
        assert!(body.contains(address), "missing {address}");
    }
    assert!(body.contains("$1.2M"));
}

#[test]
fn nothing_is_selected_on_first_load() {
    let state = init_test_state();
    let body = get_page(&state);

    assert!(!body.contains("id=\"detail\""));
    assert!(!body.contains("listing-card selected"));
    assert!(!body.contains("Active"));
    assert!(!body.contains("data-selected"));
}

#[test]
fn ready_catalog_shows_update_stamp() {
    let state = init_test_state();
    let body = get_page(&state);

    assert!(body.contains("Updated "));
    assert!(body.contains(" UTC"));
    assert!(!body.contains("Listings could not be loaded."));
}

#[test]
fn stylesheet_is_served() {
    let state = init_test_state();
    let resp = get(&state, "/static/main.css");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
}

#[test]
fn unknown_route_is_not_found() {
    let state = init_test_state();
    let err = try_get(&state, "/admin").unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
