// src/session/composer.rs
//
// The only place visibility and highlighting are computed. Map, list and
// detail renderers all read from one `ComposedView`.

use crate::domain::{matches, FilterCriteria, Listing, ListingId};
use crate::session::catalog::CatalogStatus;
use serde::Serialize;

pub const DEFAULT_ZOOM: u8 = 12;

/// Listings from the catalog that pass the criteria, in catalog order.
#[derive(Debug, Clone)]
pub struct VisibleSet<'a> {
    listings: Vec<&'a Listing>,
}

impl<'a> VisibleSet<'a> {
    pub fn compute(catalog: &'a [Listing], criteria: &FilterCriteria) -> Self {
        Self {
            listings: catalog.iter().filter(|l| matches(l, criteria)).collect(),
        }
    }

    pub fn contains(&self, id: ListingId) -> bool {
        self.listings.iter().any(|l| l.id == id)
    }

    pub fn get(&self, id: ListingId) -> Option<&'a Listing> {
        self.listings.iter().copied().find(|l| l.id == id)
    }

    #[cfg(test)]
    pub fn ids(&self) -> Vec<ListingId> {
        self.listings.iter().map(|l| l.id).collect()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Listing> + '_ {
        self.listings.iter().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Where the map should look.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewHint {
    pub center: GeoPoint,
    pub zoom: u8,
}

/// A visible listing and whether it is the selected one.
#[derive(Debug, Clone, Copy)]
pub struct ViewEntry<'a> {
    pub listing: &'a Listing,
    pub highlighted: bool,
}

/// Marker payload handed to the map renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: ListingId,
    pub latitude: f64,
    pub longitude: f64,
    pub price_label: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapPayload {
    pub view: ViewHint,
    pub criteria: FilterCriteria,
    pub markers: Vec<MapMarker>,
}

/// What the list panel renders: the visible entries and their count.
#[derive(Debug, Clone, Copy)]
pub struct ListPanel<'v, 'a> {
    pub entries: &'v [ViewEntry<'a>],
    pub count: usize,
}

impl ListPanel<'_, '_> {
    pub fn highlighted(&self) -> Option<ListingId> {
        highlighted_id(self.entries)
    }
}

/// Everything the three renderers need, derived from one snapshot of
/// catalog, criteria and selection.
#[derive(Debug, Clone)]
pub struct ComposedView<'a> {
    pub criteria: FilterCriteria,
    pub status: &'a CatalogStatus,
    entries: Vec<ViewEntry<'a>>,
    selected: Option<&'a Listing>,
    view: ViewHint,
}

impl<'a> ComposedView<'a> {
    pub fn compose(
        visible: &VisibleSet<'a>,
        criteria: FilterCriteria,
        selection: Option<ListingId>,
        status: &'a CatalogStatus,
        default_center: GeoPoint,
    ) -> Self {
        let entries: Vec<ViewEntry<'a>> = visible
            .iter()
            .map(|listing| ViewEntry {
                listing,
                highlighted: Some(listing.id) == selection,
            })
            .collect();

        let selected = selection.and_then(|id| visible.get(id));

        let center = selected
            .map(|l| GeoPoint {
                latitude: l.latitude,
                longitude: l.longitude,
            })
            .unwrap_or(default_center);

        Self {
            criteria,
            status,
            entries,
            selected,
            view: ViewHint {
                center,
                zoom: DEFAULT_ZOOM,
            },
        }
    }

    pub fn list_panel(&self) -> ListPanel<'_, 'a> {
        ListPanel {
            entries: &self.entries,
            count: self.entries.len(),
        }
    }

    pub fn map_payload(&self) -> MapPayload {
        MapPayload {
            view: self.view,
            criteria: self.criteria,
            markers: self
                .entries
                .iter()
                .map(|e| MapMarker {
                    id: e.listing.id,
                    latitude: e.listing.latitude,
                    longitude: e.listing.longitude,
                    price_label: e.listing.price_label(),
                    highlighted: e.highlighted,
                })
                .collect(),
        }
    }

    /// The full record for the detail presenter.
    pub fn detail(&self) -> Option<&'a Listing> {
        self.selected
    }

    pub fn view_hint(&self) -> ViewHint {
        self.view
    }
}

fn highlighted_id(entries: &[ViewEntry<'_>]) -> Option<ListingId> {
    entries.iter().find(|e| e.highlighted).map(|e| e.listing.id)
}
