use crate::domain::filters::{
    BedsFilter, FilterCriteria, TimeFilter, BED_OPTIONS, PRICE_MAX_OPTIONS, PRICE_MIN_OPTIONS,
};
use maud::{html, Markup};

/// Filter controls. Each control submits only its own field, so the store
/// merges it into whatever else is already set.
pub fn filter_panel(criteria: &FilterCriteria) -> Markup {
    html! {
        section class="card filters" {
            div class="filters-header" {
                h3 {
                    "Filters"
                    @if criteria.is_active() {
                        span class="badge" { "Active" }
                    }
                }
                @if criteria.is_active() {
                    a class="clear" href="/filters/clear" { "Clear all" }
                }
            }

            form action="/filters" method="get" class="price-range" {
                label { "Price Range" }
                select name="price_min" {
                    @for (value, label) in PRICE_MIN_OPTIONS {
                        option value=(value) selected[criteria.price_min == *value] { (label) }
                    }
                }
                span { "to" }
                select name="price_max" {
                    @for (value, label) in PRICE_MAX_OPTIONS {
                        option value=(value) selected[criteria.price_max == *value] { (label) }
                    }
                }
                button type="submit" { "Apply" }
            }

            div class="beds" {
                label { "Bedrooms" }
                (bed_button(criteria.beds, BedsFilter::Any, "Any"))
                @for n in BED_OPTIONS {
                    (bed_button(criteria.beds, BedsFilter::Exactly(*n), &n.to_string()))
                }
            }

            form action="/filters" method="get" class="time" {
                label for="time" { "Open House Time" }
                select name="time" id="time" {
                    @for t in TimeFilter::ALL_CHOICES {
                        option value=(t.as_str()) selected[criteria.time == t] { (t.label()) }
                    }
                }
                button type="submit" { "Apply" }
            }
        }
    }
}

fn bed_button(current: BedsFilter, value: BedsFilter, label: &str) -> Markup {
    html! {
        a.bed-option.active[current == value] href=(format!("/filters?beds={value}")) { (label) }
    }
}
