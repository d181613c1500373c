use crate::domain::Listing;
use crate::errors::ServerError;
use crate::loader::spawn_load;
use crate::router::handle;
use crate::session::composer::GeoPoint;
use crate::source::{ListingSource, SourceError, StaticSource};
use crate::state::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const SF: GeoPoint = GeoPoint {
    latitude: 37.7749,
    longitude: -122.4194,
};

/// Fresh state over the sample catalog, already loaded.
pub fn init_test_state() -> AppState {
    loaded_state(Arc::new(StaticSource::sample()))
}

pub fn loaded_state(source: Arc<dyn ListingSource>) -> AppState {
    let state = AppState::new(source, SF);
    spawn_load(&state)
        .expect("load should start")
        .join()
        .expect("loader thread panicked");
    state
}

pub fn try_get(state: &AppState, uri: &str) -> Result<Response, ServerError> {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    handle(req, state)
}

pub fn get(state: &AppState, uri: &str) -> Response {
    try_get(state, uri).unwrap_or_else(|e| panic!("GET {uri} failed: {e}"))
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn get_page(state: &AppState) -> String {
    body_string(get(state, "/"))
}

pub fn get_json(state: &AppState, uri: &str) -> serde_json::Value {
    serde_json::from_str(&body_string(get(state, uri))).expect("body should be JSON")
}

/// Ids of highlighted markers in the map feed.
pub fn highlighted_markers(state: &AppState) -> Vec<u64> {
    get_json(state, "/map/markers.json")["markers"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|m| m["highlighted"] == true)
        .map(|m| m["id"].as_u64().unwrap())
        .collect()
}

pub fn marker_ids(state: &AppState) -> Vec<u64> {
    get_json(state, "/map/markers.json")["markers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_u64().unwrap())
        .collect()
}

/// Waits for a load started by a request to land.
pub fn wait_for_ready(state: &AppState) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let ready = state
            .with_session(|s| Ok(!s.catalog().status().is_loading()))
            .unwrap();
        if ready {
            return;
        }
        assert!(Instant::now() < deadline, "catalog never finished loading");
        std::thread::sleep(Duration::from_millis(10));
    }
}

/// Fails the first `failures` fetches, then serves the sample catalog.
pub struct FlakySource {
    failures: usize,
    calls: AtomicUsize,
}

impl FlakySource {
    pub fn failing_first(failures: usize) -> Self {
        Self {
            failures,
            calls: AtomicUsize::new(0),
        }
    }
}

impl ListingSource for FlakySource {
    fn name(&self) -> &str {
        "flaky"
    }

    fn fetch_all(&self) -> Result<Vec<Listing>, SourceError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            Err(SourceError::Network("connection refused".into()))
        } else {
            StaticSource::sample().fetch_all()
        }
    }
}
