// src/domain/filter.rs

use crate::domain::listing::Listing;

pub const WILDCARD: &str = "All";

/// What the visitor picked in the filter bar.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub max_budget: f64,
    /// `"All"` matches every tenant type.
    pub tenant_type: String,
    /// Empty, or containing `"All"`, matches every room type.
    pub room_types: Vec<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            max_budget: f64::INFINITY,
            tenant_type: WILDCARD.to_string(),
            room_types: Vec::new(),
        }
    }
}

impl FilterCriteria {
    /// Builds criteria from decoded query pairs (`max_budget`, `tenant`,
    /// repeatable `room`). Unknown keys are ignored; a budget that does not
    /// parse leaves the ceiling open.
    pub fn from_query<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut criteria = Self::default();

        for (key, value) in pairs {
            let value = value.as_ref().trim();
            match key.as_ref() {
                "max_budget" => {
                    criteria.max_budget = value
                        .parse::<f64>()
                        .ok()
                        .filter(|b| !b.is_nan())
                        .unwrap_or(f64::INFINITY);
                }
                "tenant" if !value.is_empty() => criteria.tenant_type = value.to_string(),
                "room" if !value.is_empty() => criteria.room_types.push(value.to_string()),
                _ => {}
            }
        }

        criteria
    }

    pub fn is_wildcard(value: &str) -> bool {
        value.is_empty() || value.eq_ignore_ascii_case(WILDCARD)
    }

    pub fn room_is_wildcard(&self) -> bool {
        self.room_types.is_empty() || self.room_types.iter().any(|r| Self::is_wildcard(r))
    }

    /// Minimum-bound comparison: a listing is affordable when its cheapest
    /// option fits the ceiling. Unpriced listings count as free.
    pub fn price_ok(&self, listing: &Listing) -> bool {
        listing.lowest_price().unwrap_or(0.0) <= self.max_budget
    }

    pub fn tenant_ok(&self, listing: &Listing) -> bool {
        if Self::is_wildcard(&self.tenant_type) {
            return true;
        }
        contains_ci(&listing.tenant_type, &self.tenant_type)
    }

    pub fn room_ok(&self, listing: &Listing) -> bool {
        if self.room_is_wildcard() {
            return true;
        }
        self.room_types.iter().any(|wanted| {
            listing
                .room_types
                .iter()
                .any(|offered| contains_ci(offered, wanted))
        })
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.price_ok(listing) && self.tenant_ok(listing) && self.room_ok(listing)
    }
}

/// Case-insensitive equality or substring match.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    let haystack = haystack.to_lowercase();
    let needle = needle.trim().to_lowercase();
    haystack == needle || haystack.contains(&needle)
}

/// Keeps the listings that satisfy every predicate, in their original order.
pub fn filter_listings<'a>(listings: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    listings.iter().filter(|l| criteria.matches(l)).collect()
}
