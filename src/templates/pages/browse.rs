// templates/pages/browse.rs

use crate::session::composer::ComposedView;
use crate::templates::{
    components::{detail_panel, filter_panel, list_panel, map_panel},
    desktop_layout,
};
use maud::{html, Markup};

/// The main page: filters and list in the sidebar, map beside them, and the
/// detail panel when something is selected. Every panel reads the same view.
pub fn browse_page(view: &ComposedView<'_>) -> Markup {
    let map = view.map_payload();

    desktop_layout(
        "Open House Finder",
        html! {
            main class="browse" {
                div class="sidebar" {
                    (filter_panel(&view.criteria))
                    (list_panel(&view.list_panel(), view.status))
                }
                div class="map-pane" {
                    (map_panel(&map, view.detail()))
                }
                (detail_panel(view.detail()))
            }
        },
    )
}
