use crate::domain::Listing;
use crate::router::listing_href;
use maud::{html, Markup};

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        article class="card" tabindex="0" {
            img src=(listing.image) alt=(listing.title) data-img-id=(listing.id);
            div class="meta" {
                div { (listing.distance) }
                div class="price" { (listing.price_label()) }
            }
            h4 { (listing.title) }
            p class="muted" { (listing.wifi) }
            div class="meta" {
                div class="muted" { (listing.tenant_type) " • " (listing.room_types_label()) }
            }
            div class="actions" {
                a class="view-btn" href=(listing_href(&listing.id)) { "View details" }
            }
        }
    }
}
