use crate::session::composer::ListPanel;
use crate::session::CatalogStatus;
use maud::{html, Markup};

pub fn list_panel(panel: &ListPanel<'_, '_>, status: &CatalogStatus) -> Markup {
    let selected = panel.highlighted().map(|id| id.to_string());

    html! {
        section class="listings" data-selected=[selected] {
            div class="listings-header" {
                h3 { "Open Houses" }
                span class="count" { (panel.count) " properties" }
            }
            @if let Some(loaded_at) = status.loaded_at() {
                p class="updated" { "Updated " (loaded_at.format("%H:%M UTC").to_string()) }
            }

            @if status.is_failed() {
                div class="load-error" {
                    p { "Listings could not be loaded." }
                    @if let Some(reason) = status.failure_reason() {
                        p class="reason" { (reason) }
                    }
                    a class="retry" href="/retry" { "Try again" }
                }
            } @else if panel.count == 0 && status.is_loading() {
                p class="loading" { "Loading listings…" }
            } @else if panel.count == 0 {
                div class="empty" {
                    p { "No properties match your filters" }
                    p class="hint" { "Try adjusting your search criteria" }
                }
            }

            ul class="cards" {
                @for entry in panel.entries {
                    @let l = entry.listing;
                    li.listing-card.selected[entry.highlighted] id=(format!("listing-{}", l.id)) {
                        div class="card-top" {
                            h4 class="price" { (l.price_label()) }
                            span class="time" { (l.open_house_time) }
                        }
                        p class="address" { (l.address) }
                        p class="rooms" {
                            span { "Beds: " strong { (l.beds) } }
                            span { "Baths: " strong { (l.baths) } }
                        }
                        p class="description" { (l.description) }
                        div class="actions" {
                            a class="primary" href=(format!("/select/{}", l.id)) { "View on Map" }
                            a href=(format!("/details/{}", l.id)) { "Details" }
                        }
                    }
                }
            }
        }
    }
}
