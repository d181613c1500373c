use crate::domain::Listing;
use maud::{html, Markup};

pub fn detail_panel(listing: Option<&Listing>) -> Markup {
    let Some(l) = listing else {
        return html! {};
    };

    html! {
        aside class="detail" id="detail" {
            div class="detail-header" {
                a class="close" href="/dismiss" title="Close" { "✕" }
                h2 { (l.price_label()) }
                p class="address" { (l.address) }
                div class="chips" {
                    span { (l.beds_label()) }
                    span { (l.baths_label()) }
                    span class="time" { (l.open_house_time) }
                }
            }
            div class="detail-body" {
                h3 { "Property Description" }
                p { (l.description) }
                dl {
                    dt { "Listing #" }
                    dd { (l.id.to_string()) }
                    dt { "Location" }
                    dd { (format!("{:.4}, {:.4}", l.latitude, l.longitude)) }
                }
            }
        }
    }
}
