use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use url::Url;

use crate::session::composer::GeoPoint;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Backend serving `/open-houses`. `None` uses the built-in sample catalog.
    pub listings_url: Option<Url>,
    pub map_center: GeoPoint,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            bind_addr: get("BIND_ADDR")
                .unwrap_or_else(|| "127.0.0.1:3000".to_string())
                .parse()
                .context("BIND_ADDR must be a socket address like 127.0.0.1:3000")?,
            max_workers: get("MAX_WORKERS")
                .unwrap_or_else(|| "8".to_string())
                .parse()
                .context("MAX_WORKERS must be a valid number")?,
            listings_url: get("LISTINGS_URL")
                .filter(|s| !s.trim().is_empty())
                .map(|s| Url::parse(s.trim()))
                .transpose()
                .context("LISTINGS_URL must be an absolute URL")?,
            map_center: GeoPoint {
                latitude: get("MAP_CENTER_LAT")
                    .unwrap_or_else(|| "37.7749".to_string())
                    .parse()
                    .context("MAP_CENTER_LAT must be a number")?,
                longitude: get("MAP_CENTER_LON")
                    .unwrap_or_else(|| "-122.4194".to_string())
                    .parse()
                    .context("MAP_CENTER_LON must be a number")?,
            },
        })
    }
}
