use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod filter_bar;

pub use card::listing_card;
pub use error::html_error_response;
pub use filter_bar::{filter_bar, FilterOptions};

pub fn button(label: &str) -> Markup {
    html! {
        button type="submit" class="btn" { (label) }
    }
}
