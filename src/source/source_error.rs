use thiserror::Error;

/// Why a listing source could not deliver the catalog.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Listing source returned HTTP {0}")]
    Status(u16),

    #[error("Could not decode listings: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SourceError::Decode(e.to_string())
        } else {
            SourceError::Network(e.to_string())
        }
    }
}
