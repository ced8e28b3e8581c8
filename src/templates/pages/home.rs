// templates/pages/home.rs

use crate::domain::{FilterCriteria, Listing};
use crate::templates::{
    components::{button, filter_bar, listing_card, FilterOptions},
    desktop_layout,
};
use chrono::{DateTime, Utc};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub listings: &'a [&'a Listing],
    pub total: usize,
    pub criteria: &'a FilterCriteria,
    pub options: FilterOptions,
    pub status: &'a str,
    pub resolved_at: DateTime<Utc>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Listings",
        html! {
            main class="container" {
                section class="toolbar" {
                    (filter_bar(vm.criteria, &vm.options))
                    form method="post" action="/refresh" class="refresh" {
                        (button("Reload listings"))
                    }
                }

                p class="muted" {
                    span id="dataSourceNote" { (vm.status) }
                    " · updated " (vm.resolved_at.format("%Y-%m-%d %H:%M UTC").to_string())
                }
                p class="muted" { "Showing " (vm.listings.len()) " of " (vm.total) " listings" }

                section id="listingGrid" class="grid" {
                    @if vm.listings.is_empty() {
                        p { "No listings match your filters." }
                    } @else {
                        @for listing in vm.listings {
                            (listing_card(listing))
                        }
                    }
                }
            }
        },
    )
}
