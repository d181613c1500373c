// src/domain/listing.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a listing for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u64);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListingId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ListingId)
    }
}

/// One open-house property record, as delivered by a listing source.
///
/// Field names follow the transport shape (`open_house_time` etc.) so the
/// same struct is used for ingestion and for the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub address: String,

    // Whole dollars
    pub price: u64,
    pub beds: u32,
    pub baths: u32,

    pub latitude: f64,
    pub longitude: f64,

    /// Free-text window, e.g. "Sat 1-4pm".
    pub open_house_time: String,
    pub description: String,
}

impl Listing {
    /// Checks the fields a source cannot be trusted with: a positive price and
    /// coordinates inside the geographic range.
    pub fn validate(&self) -> Result<(), String> {
        if self.price == 0 {
            return Err(format!("listing {} has no price", self.id));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(format!(
                "listing {} latitude {} out of range",
                self.id, self.latitude
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(format!(
                "listing {} longitude {} out of range",
                self.id, self.longitude
            ));
        }
        Ok(())
    }

    pub fn price_label(&self) -> String {
        price_label(self.price)
    }

    pub fn beds_label(&self) -> String {
        plural(self.beds, "bed")
    }

    pub fn baths_label(&self) -> String {
        plural(self.baths, "bath")
    }
}

/// Short price tag used on markers and cards: `$1.2M`.
pub fn price_label(price: u64) -> String {
    format!("${:.1}M", price as f64 / 1_000_000.0)
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}
