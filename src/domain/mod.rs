pub mod filter;
pub mod listing;
pub mod normalize;

pub use filter::{filter_listings, FilterCriteria};
pub use listing::Listing;
pub use normalize::{csv_to_raw, normalize_records, RawRecord};
