// http_source.rs
use crate::domain::Listing;
use crate::source::models::OpenHousesEnvelope;
use crate::source::{ListingSource, SourceError};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("open_house_finder/", env!("CARGO_PKG_VERSION"));

/// Fetches the whole catalog from a backend exposing `GET {base}/open-houses`.
pub struct HttpSource {
    client: Client,
    endpoint: Url,
}

impl HttpSource {
    pub fn new(base: &Url) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let endpoint = endpoint_url(base).map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ListingSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch_all(&self) -> Result<Vec<Listing>, SourceError> {
        debug!(url = %self.endpoint, "fetching open houses");

        let resp = self.client.get(self.endpoint.clone()).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = resp.text()?;
        parse_open_houses(&body)
    }
}

/// `{base}/open-houses`, treating the base as a directory even without a
/// trailing slash.
fn endpoint_url(base: &Url) -> Result<Url, url::ParseError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("open-houses")
}

/// Decodes the envelope and drops listings that fail validation.
pub fn parse_open_houses(body: &str) -> Result<Vec<Listing>, SourceError> {
    let envelope: OpenHousesEnvelope =
        serde_json::from_str(body).map_err(|e| SourceError::Decode(e.to_string()))?;

    Ok(envelope
        .open_houses
        .into_iter()
        .filter(|l| match l.validate() {
            Ok(()) => true,
            Err(reason) => {
                warn!(%reason, "skipping invalid listing");
                false
            }
        })
        .collect())
}
