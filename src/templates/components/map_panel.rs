use crate::domain::Listing;
use crate::session::composer::{MapMarker, MapPayload};
use maud::{html, Markup};

/// Server-side stand-in for the map renderer: one pin per visible listing,
/// and a popup for the selected one. A client map can take over from
/// `/map/markers.json` using the same payload.
pub fn map_panel(payload: &MapPayload, selected: Option<&Listing>) -> Markup {
    html! {
        section
            class="map"
            id="map"
            data-markers-url="/map/markers.json"
            data-center-lat=(payload.view.center.latitude)
            data-center-lon=(payload.view.center.longitude)
            data-zoom=(payload.view.zoom)
        {
            ul class="markers" {
                @for marker in &payload.markers {
                    (pin(marker))
                }
            }

            @if let Some(l) = selected {
                div class="popup" {
                    a class="close" href="/dismiss" title="Close" { "✕" }
                    h3 class="price" { (l.price_label()) }
                    p class="address" { (l.address) }
                    p class="rooms" {
                        span { (l.beds) " bed" }
                        span { (l.baths) " bath" }
                    }
                    p class="time" { (l.open_house_time) }
                    p class="description" { (l.description) }
                }
            }
        }
    }
}

fn pin(marker: &MapMarker) -> Markup {
    html! {
        li.marker.highlighted[marker.highlighted] data-lat=(marker.latitude) data-lon=(marker.longitude) {
            a href=(format!("/select/{}", marker.id)) { (marker.price_label) }
        }
    }
}
