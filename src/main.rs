use crate::config::Config;
use crate::router::handle;
use crate::source::{HttpSource, ListingSource, StaticSource};
use crate::state::AppState;
use anyhow::{Context, Result};
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod loader;
mod responses;
mod router;
mod session;
mod source;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> Result<()> {
    // 1️⃣ Logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,open_house_finder=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2️⃣ Configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(?config, "configuration loaded");

    // 3️⃣ Listing source + session, and kick off the first catalog load
    let source: Arc<dyn ListingSource> = match &config.listings_url {
        Some(url) => {
            let http = HttpSource::new(url).context("Failed to build HTTP listing source")?;
            tracing::info!(endpoint = %http.endpoint(), "fetching listings from remote source");
            Arc::new(http)
        }
        None => {
            tracing::info!("LISTINGS_URL not set; using the built-in sample catalog");
            Arc::new(StaticSource::sample())
        }
    };
    let state = AppState::new(source, config.map_center);
    loader::spawn_load(&state).context("Failed to start catalog load")?;

    // 4️⃣ Serve requests, each one a single event against the session
    tracing::info!("Starting server at http://{}", config.bind_addr);
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    server
        .serve(move |req, _info| match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => responses::html_error_response(err),
        })
        .context("Server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
