// src/session/filter_store.rs

use crate::domain::{FilterCriteria, FilterUpdate};
use tracing::{debug, warn};

/// Sole owner of the active filter criteria.
#[derive(Debug, Default)]
pub struct FilterStore {
    criteria: FilterCriteria,
}

impl FilterStore {
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Merges `update` into the current criteria and returns the result.
    pub fn apply(&mut self, update: &FilterUpdate) -> &FilterCriteria {
        self.criteria = self.criteria.merged(update);
        if self.criteria.is_inverted() {
            warn!(
                price_min = self.criteria.price_min,
                price_max = self.criteria.price_max,
                "price bounds are inverted; nothing will match"
            );
        }
        debug!(criteria = ?self.criteria, "filters updated");
        &self.criteria
    }

    pub fn reset(&mut self) -> &FilterCriteria {
        self.criteria = FilterCriteria::default();
        debug!("filters cleared");
        &self.criteria
    }
}
