// loader.rs
use crate::errors::ServerError;
use crate::session::catalog::LoadOutcome;
use crate::source::ListingSource;
use crate::state::AppState;
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{error, info};

/// Starts a catalog load from the configured source on a background thread.
pub fn spawn_load(state: &AppState) -> Result<JoinHandle<Option<LoadOutcome>>, ServerError> {
    spawn_load_from(state, state.source())
}

/// The ticket is issued before the thread starts, so a later call always
/// wins over an earlier one regardless of which fetch finishes first.
pub fn spawn_load_from(
    state: &AppState,
    source: Arc<dyn ListingSource>,
) -> Result<JoinHandle<Option<LoadOutcome>>, ServerError> {
    let ticket = state.with_session(|s| Ok(s.begin_load()))?;
    let state = state.clone();

    let handle = std::thread::spawn(move || {
        info!(
            source = source.name(),
            generation = ticket.generation(),
            "🧵 loader thread started"
        );

        let result = source.fetch_all();

        match state.with_session(|s| Ok(s.complete_load(ticket, result))) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                error!(error = %e, "could not apply catalog load");
                None
            }
        }
    });

    Ok(handle)
}
