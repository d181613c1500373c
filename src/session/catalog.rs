// src/session/catalog.rs

use crate::domain::{Listing, ListingId};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::warn;

/// Where the catalog is in its load lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogStatus {
    Idle,
    Loading,
    Ready {
        loaded_at: DateTime<Utc>,
        count: usize,
    },
    Failed {
        reason: String,
    },
}

impl CatalogStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, CatalogStatus::Failed { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogStatus::Loading)
    }

    pub fn loaded_at(&self) -> Option<&DateTime<Utc>> {
        match self {
            CatalogStatus::Ready { loaded_at, .. } => Some(loaded_at),
            _ => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            CatalogStatus::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}

/// Proof that a load was requested. Only the most recently issued ticket
/// may replace the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Superseded,
}

/// The full in-session set of listings, in source order.
#[derive(Debug)]
pub struct Catalog {
    listings: Vec<Listing>,
    status: CatalogStatus,
    latest_generation: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            listings: Vec::new(),
            status: CatalogStatus::Idle,
            latest_generation: 0,
        }
    }
}

impl Catalog {
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Issues a ticket newer than any before it and marks the catalog as loading.
    /// Listings from the previous load stay readable until a result lands.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_generation += 1;
        self.status = CatalogStatus::Loading;
        LoadTicket {
            generation: self.latest_generation,
        }
    }

    /// Applies a load result if `ticket` is still the latest one.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Listing>, String>,
    ) -> LoadOutcome {
        if ticket.generation != self.latest_generation {
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(listings) => {
                self.listings = dedupe(listings);
                self.status = CatalogStatus::Ready {
                    loaded_at: Utc::now(),
                    count: self.listings.len(),
                };
            }
            Err(reason) => {
                self.listings.clear();
                self.status = CatalogStatus::Failed { reason };
            }
        }

        LoadOutcome::Applied
    }
}

/// Keeps the first listing for each id.
fn dedupe(listings: Vec<Listing>) -> Vec<Listing> {
    let mut seen = HashSet::new();
    listings
        .into_iter()
        .filter(|l| {
            let fresh = seen.insert(l.id);
            if !fresh {
                warn!(id = %l.id, "dropping duplicate listing id from source");
            }
            fresh
        })
        .collect()
}
