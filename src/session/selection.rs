// src/session/selection.rs

use crate::domain::ListingId;
use crate::session::composer::VisibleSet;
use tracing::debug;

/// Holds the one listing, if any, that both views highlight.
///
/// List clicks and marker clicks go through the same `select`, so there is a
/// single selected id no matter which view emitted the event.
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Option<ListingId>,
}

impl SelectionController {
    pub fn selected(&self) -> Option<ListingId> {
        self.selected
    }

    /// Selects `id` if it is currently visible. Anything else (a stale click
    /// after a reload, or a listing hidden by the filters) leaves the
    /// selection untouched. Returns whether the selection changed.
    pub fn select(&mut self, id: ListingId, visible: &VisibleSet<'_>) -> bool {
        if !visible.contains(id) {
            debug!(%id, "ignoring selection of a listing that is not visible");
            return false;
        }
        let changed = self.selected != Some(id);
        self.selected = Some(id);
        changed
    }

    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Drops the selection when its listing fell out of `visible`.
    /// Returns true if a selection was cleared.
    pub fn retain_visible(&mut self, visible: &VisibleSet<'_>) -> bool {
        match self.selected {
            Some(id) if !visible.contains(id) => {
                debug!(%id, "selected listing no longer visible; clearing selection");
                self.selected = None;
                true
            }
            _ => false,
        }
    }
}
