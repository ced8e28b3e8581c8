use crate::domain::filter::{FilterCriteria, WILDCARD};
use crate::domain::Listing;
use maud::{html, Markup};

const BUDGET_STEP: u64 = 500;

pub struct FilterOptions {
    pub tenant_types: Vec<String>,
    pub room_types: Vec<String>,
    /// Upper end of the budget slider.
    pub budget_ceiling: u64,
}

impl FilterOptions {
    /// Choices offered by the select boxes, in first-seen order, and a
    /// slider ceiling rounded up to the next 500 above the priciest listing.
    pub fn from_listings(listings: &[Listing]) -> Self {
        let mut tenant_types: Vec<String> = Vec::new();
        let mut room_types: Vec<String> = Vec::new();

        for listing in listings {
            push_unique(&mut tenant_types, &listing.tenant_type);
            for room in &listing.room_types {
                push_unique(&mut room_types, room);
            }
        }

        let top = listings
            .iter()
            .filter_map(|l| l.price_max.or(l.price_min))
            .fold(0.0_f64, f64::max)
            .ceil() as u64;

        Self {
            tenant_types,
            room_types,
            budget_ceiling: (top / BUDGET_STEP)
                .saturating_add(1)
                .saturating_mul(BUDGET_STEP),
        }
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !FilterCriteria::is_wildcard(value) && !values.iter().any(|v| v.eq_ignore_ascii_case(value)) {
        values.push(value.to_string());
    }
}

/// GET form; every change reloads the page with the new query.
pub fn filter_bar(criteria: &FilterCriteria, options: &FilterOptions) -> Markup {
    let budget = if criteria.max_budget.is_finite() {
        criteria.max_budget.max(0.0).round() as u64
    } else {
        options.budget_ceiling
    };
    let selected_room = criteria
        .room_types
        .first()
        .map(String::as_str)
        .unwrap_or(WILDCARD);

    html! {
        form class="filters" method="get" action="/" {
            label for="priceRange" { "Max budget: ₱" output id="priceValue" for="priceRange" { (budget) } }
            input type="range" id="priceRange" name="max_budget"
                min="0" max=(options.budget_ceiling) step="50" value=(budget)
                oninput="priceValue.value = this.value";

            label for="tenantSelect" { "Tenant" }
            select id="tenantSelect" name="tenant" {
                option value=(WILDCARD) selected[FilterCriteria::is_wildcard(&criteria.tenant_type)] { "All" }
                @for tenant in &options.tenant_types {
                    option value=(tenant) selected[tenant.eq_ignore_ascii_case(&criteria.tenant_type)] { (tenant) }
                }
            }

            label for="roomTypeSelect" { "Room type" }
            select id="roomTypeSelect" name="room" {
                option value=(WILDCARD) selected[criteria.room_is_wildcard()] { "All" }
                @for room in &options.room_types {
                    option value=(room) selected[room.eq_ignore_ascii_case(selected_room)] { (room) }
                }
            }

            button type="submit" class="btn" { "Apply" }
            a href="/" class="reset" { "Reset" }
        }
    }
}
