// src/session/mod.rs

pub mod catalog;
pub mod composer;
pub mod filter_store;
pub mod selection;

#[cfg(test)]
use crate::domain::FilterCriteria;
use crate::domain::{FilterUpdate, Listing, ListingId};
use crate::source::SourceError;
use catalog::{Catalog, LoadOutcome, LoadTicket};
use composer::{ComposedView, GeoPoint, VisibleSet};
use filter_store::FilterStore;
use selection::SelectionController;
use tracing::{debug, info, warn};

pub use catalog::CatalogStatus;

/// One browsing session: the single owner of catalog, criteria and selection.
///
/// Every method is one event. It runs to completion, so the selection is
/// already re-validated against the new visible set when it returns.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    filters: FilterStore,
    selection: SelectionController,
    default_center: GeoPoint,
}

impl Session {
    pub fn new(default_center: GeoPoint) -> Self {
        Self {
            catalog: Catalog::default(),
            filters: FilterStore::default(),
            selection: SelectionController::default(),
            default_center,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[cfg(test)]
    pub fn criteria(&self) -> &FilterCriteria {
        self.filters.criteria()
    }

    #[cfg(test)]
    pub fn selection(&self) -> Option<ListingId> {
        self.selection.selected()
    }

    pub fn visible(&self) -> VisibleSet<'_> {
        VisibleSet::compute(self.catalog.listings(), self.filters.criteria())
    }

    pub fn view(&self) -> ComposedView<'_> {
        ComposedView::compose(
            &self.visible(),
            *self.filters.criteria(),
            self.selection.selected(),
            self.catalog.status(),
            self.default_center,
        )
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        let ticket = self.catalog.begin_load();
        info!(generation = ticket.generation(), "catalog load started");
        ticket
    }

    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Listing>, SourceError>,
    ) -> LoadOutcome {
        let result = result.map_err(|e| {
            warn!(generation = ticket.generation(), error = %e, "catalog load failed");
            e.to_string()
        });

        let outcome = self.catalog.complete_load(ticket, result);
        match outcome {
            LoadOutcome::Applied => {
                info!(
                    generation = ticket.generation(),
                    listings = self.catalog.len(),
                    "catalog load applied"
                );
                if self.catalog.is_empty() && !self.catalog.status().is_failed() {
                    warn!(generation = ticket.generation(), "listing source returned no listings");
                }
                self.revalidate_selection();
            }
            LoadOutcome::Superseded => {
                info!(
                    generation = ticket.generation(),
                    "discarding result of superseded catalog load"
                );
            }
        }
        outcome
    }

    pub fn update_filters(&mut self, update: &FilterUpdate) {
        self.filters.apply(update);
        self.revalidate_selection();
    }

    pub fn clear_filters(&mut self) {
        self.filters.reset();
        self.revalidate_selection();
    }

    /// Selection from either the list or a map marker.
    pub fn select(&mut self, id: ListingId) -> bool {
        let visible = VisibleSet::compute(self.catalog.listings(), self.filters.criteria());
        self.selection.select(id, &visible)
    }

    pub fn dismiss(&mut self) -> bool {
        self.selection.clear()
    }

    fn revalidate_selection(&mut self) {
        let visible = VisibleSet::compute(self.catalog.listings(), self.filters.criteria());
        if visible.is_empty() && !self.catalog.is_empty() {
            debug!("no listings match the current filters");
        } else {
            debug!(visible = visible.len(), "visible set recomputed");
        }
        self.selection.retain_visible(&visible);
    }
}
