use crate::domain::Listing;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn detail_page(listing: &Listing) -> Markup {
    desktop_layout(
        &listing.title,
        html! {
            main class="container" {
                article id="detailContent" class="detail" {
                    img src=(listing.image) alt=(listing.title) data-img-id=(listing.id);
                    p class="muted" { (listing.distance) " • " (listing.wifi) }
                    h3 { (listing.title) }
                    p { strong { "Tenant:" } " " (listing.tenant_type) }
                    p { strong { "Room types:" } " " (listing.room_types_label()) }
                    p { strong { "Price:" } " " (listing.price_label()) }
                    @if !listing.description.is_empty() {
                        p { (listing.description) }
                    }
                }
                p { a href="/" { "← Back to listings" } }
            }
        },
    )
}
