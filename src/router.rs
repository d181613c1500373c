use crate::domain::{BedsFilter, FilterUpdate, ListingId, TimeFilter};
use crate::errors::ServerError;
use crate::loader::spawn_load;
use crate::responses::{
    css_response, html_response, json_response, json_with_status, redirect, ResultResp,
};
use crate::source::OpenHousesEnvelope;
use crate::state::AppState;
use crate::templates;
use astra::Request;
use serde_json::json;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!(%method, %path, "request");

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        ("GET", [""]) => {
            state.with_session(|s| html_response(templates::pages::browse_page(&s.view())))
        }

        // Filter panel
        ("GET", ["filters"]) => {
            let update = parse_filter_update(&parse_query(&req))?;
            if update.is_empty() {
                debug!("filter request carried no filter fields");
            }
            state.with_session(|s| {
                s.update_filters(&update);
                Ok(())
            })?;
            redirect("/")
        }
        ("GET", ["filters", "clear"]) => {
            state.with_session(|s| {
                s.clear_filters();
                Ok(())
            })?;
            redirect("/")
        }

        // List card, map marker, and "Details" all select the same way.
        ("GET", ["select", id]) | ("GET", ["details", id]) => {
            let id = parse_id(id)?;
            state.with_session(|s| {
                s.select(id);
                Ok(())
            })?;
            redirect("/")
        }
        ("GET", ["dismiss"]) => {
            state.with_session(|s| {
                s.dismiss();
                Ok(())
            })?;
            redirect("/")
        }

        ("GET", ["retry"]) => {
            spawn_load(state)?;
            redirect("/")
        }

        // Map renderer feed
        ("GET", ["map", "markers.json"]) => {
            state.with_session(|s| json_response(&s.view().map_payload()))
        }

        // Read-only catalog API
        ("GET", ["api", "open-houses"]) => state.with_session(|s| {
            json_response(&OpenHousesEnvelope {
                open_houses: s.catalog().listings().to_vec(),
            })
        }),
        ("GET", ["api", "open-houses", id]) => {
            let id = parse_id(id)?;
            state.with_session(|s| match s.catalog().get(id) {
                Some(listing) => json_response(listing),
                None => json_with_status(404, &json!({ "error": "Open house not found" })),
            })
        }

        ("GET", ["health"]) => json_response(&json!({ "status": "healthy" })),

        ("GET", ["static", "main.css"]) => css_response(MAIN_CSS),

        _ => Err(ServerError::NotFound),
    }
}

fn parse_id(raw: &str) -> Result<ListingId, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("Invalid listing id: {raw}")))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Builds a partial update from whichever filter fields the query carries.
fn parse_filter_update(params: &HashMap<String, String>) -> Result<FilterUpdate, ServerError> {
    fn field<T: FromStr>(
        params: &HashMap<String, String>,
        key: &str,
    ) -> Result<Option<T>, ServerError> {
        params
            .get(key)
            .map(|v| {
                v.trim()
                    .parse()
                    .map_err(|_| ServerError::BadRequest(format!("Invalid value for {key}: {v}")))
            })
            .transpose()
    }

    Ok(FilterUpdate {
        price_min: field::<u64>(params, "price_min")?,
        price_max: field::<u64>(params, "price_max")?,
        beds: field::<BedsFilter>(params, "beds")?,
        time: field::<TimeFilter>(params, "time")?,
    })
}
