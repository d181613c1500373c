// errors.rs
use thiserror::Error;

/// Errors surfaced by the web layer. Core invariant violations never reach
/// here; they are no-ops inside the session.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Internal(_) => 500,
        }
    }
}
