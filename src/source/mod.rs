mod http_source;
mod models;
mod source_error;
mod static_source;

use crate::domain::Listing;

pub use http_source::HttpSource;
pub use models::OpenHousesEnvelope;
pub use source_error::SourceError;
pub use static_source::StaticSource;

/// Supplies the full candidate set of listings in one call. No paging or
/// filtering crosses this boundary.
pub trait ListingSource: Send + Sync {
    fn name(&self) -> &str;

    fn fetch_all(&self) -> Result<Vec<Listing>, SourceError>;
}
