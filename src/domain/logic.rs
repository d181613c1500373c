// src/domain/logic.rs

use crate::domain::filters::{BedsFilter, FilterCriteria, TimeFilter, PRICE_CEILING};
use crate::domain::listing::Listing;

/// Day tokens that mark a weekend open house in the free-text time window.
const WEEKEND_TOKENS: [&str; 2] = ["Sat", "Sun"];

/// Decides whether a listing passes every constraint in `criteria`.
/// All checks must hold; the first failing one short-circuits.
///
/// Inverted price bounds are unsatisfiable, so they reject every listing.
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    price_matches(listing.price, criteria)
        && beds_matches(listing.beds, criteria.beds)
        && time_matches(&listing.open_house_time, criteria.time)
}

fn price_matches(price: u64, criteria: &FilterCriteria) -> bool {
    if criteria.is_inverted() {
        return false;
    }
    if price < criteria.price_min {
        return false;
    }
    // A maximum at the ceiling is the "$2M+" choice.
    criteria.price_max >= PRICE_CEILING || price <= criteria.price_max
}

fn beds_matches(beds: u32, filter: BedsFilter) -> bool {
    match filter {
        BedsFilter::Any => true,
        BedsFilter::Exactly(n) => beds == n,
    }
}

fn time_matches(window: &str, filter: TimeFilter) -> bool {
    match filter {
        TimeFilter::All => true,
        // Plain substring test on the descriptor, not a calendar lookup.
        TimeFilter::Weekend => WEEKEND_TOKENS.iter().any(|day| window.contains(day)),
        // Accepted but not narrowing anything yet.
        TimeFilter::Today | TimeFilter::OpenNow => true,
    }
}
