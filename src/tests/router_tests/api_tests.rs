// src/tests/router_tests/api_tests.rs

use crate::tests::utils::{body_string, get, get_json, init_test_state};

#[test]
fn lists_catalog_in_source_order() {
    let state = init_test_state();

    let json = get_json(&state, "/api/open-houses");
    let ids: Vec<u64> = json["open_houses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["id"].as_u64().unwrap())
        .collect();

    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn catalog_api_ignores_filters() {
    let state = init_test_state();
    get(&state, "/filters?beds=3");

    let json = get_json(&state, "/api/open-houses");
    assert_eq!(json["open_houses"].as_array().unwrap().len(), 4);
}

#[test]
fn single_listing_by_id() {
    let state = init_test_state();

    let json = get_json(&state, "/api/open-houses/2");

    assert_eq!(json["address"], "456 Valencia St, San Francisco, CA");
    assert_eq!(json["open_house_time"], "Sun 2-5pm");
    assert_eq!(json["price"], 950000);
}

#[test]
fn missing_listing_is_json_404() {
    let state = init_test_state();

    let resp = get(&state, "/api/open-houses/99");
    assert_eq!(resp.status(), 404);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["error"], "Open house not found");
}

#[test]
fn marker_feed_carries_price_labels() {
    let state = init_test_state();

    let json = get_json(&state, "/map/markers.json");
    let labels: Vec<&str> = json["markers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["price_label"].as_str().unwrap())
        .collect();

    assert_eq!(labels, vec!["$1.2M", "$0.9M", "$1.4M", "$0.9M"]);
}

#[test]
fn marker_feed_echoes_active_criteria() {
    let state = init_test_state();
    get(&state, "/filters?beds=1&time=open-now&price_max=1000000");

    let json = get_json(&state, "/map/markers.json");
    assert_eq!(json["criteria"]["beds"], "1");
    assert_eq!(json["criteria"]["time"], "open-now");
    assert_eq!(json["criteria"]["price_min"], 0);
    assert_eq!(json["criteria"]["price_max"], 1_000_000);

    get(&state, "/filters/clear");
    let json = get_json(&state, "/map/markers.json");
    assert_eq!(json["criteria"]["beds"], "any");
    assert_eq!(json["criteria"]["time"], "all");
}

#[test]
fn health_check_reports_healthy() {
    let state = init_test_state();

    let json = get_json(&state, "/health");
    assert_eq!(json, serde_json::json!({ "status": "healthy" }));
}
