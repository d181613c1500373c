use crate::errors::ServerError;
use crate::session::composer::GeoPoint;
use crate::session::Session;
use crate::source::ListingSource;
use std::sync::{Arc, Mutex};

/// Handle shared by every request worker. Cloning is cheap (two `Arc`s).
///
/// All access to the session goes through `with_session`, so each request
/// is applied as one uninterrupted event.
#[derive(Clone)]
pub struct AppState {
    session: Arc<Mutex<Session>>,
    source: Arc<dyn ListingSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn ListingSource>, default_center: GeoPoint) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new(default_center))),
            source,
        }
    }

    pub fn source(&self) -> Arc<dyn ListingSource> {
        Arc::clone(&self.source)
    }

    /// Provides exclusive access to the session for the duration of `f`.
    pub fn with_session<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Session) -> Result<T, ServerError>,
    {
        let mut session = self
            .session
            .lock()
            .map_err(|_| ServerError::Internal("session lock poisoned".into()))?;
        f(&mut session)
    }
}
