pub mod filters;
pub mod listing;
pub mod logic;

pub use filters::{BedsFilter, FilterCriteria, FilterUpdate, TimeFilter};
pub use listing::{Listing, ListingId};
pub use logic::matches;
