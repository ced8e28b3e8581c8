use crate::domain::Listing;
use crate::responses::{csv_response, ResultResp};
use crate::spreadsheets::csv::{records_to_csv, CsvRecord};

fn price_cell(price: Option<f64>) -> String {
    price.map(|p| p.to_string()).unwrap_or_default()
}

/// One row per listing, keyed by the canonical field names so the export
/// can be fed straight back in as a spreadsheet source.
///
/// Room types are joined with `", "`. The normalizer splits lists on both
/// `,` and `/`, so a room type containing either character reads back as
/// several entries.
pub fn listing_rows(listings: &[Listing]) -> Vec<CsvRecord> {
    listings
        .iter()
        .map(|l| {
            CsvRecord::from([
                ("id".to_string(), l.id.clone()),
                ("title".to_string(), l.title.clone()),
                ("tenant_type".to_string(), l.tenant_type.clone()),
                ("room_types".to_string(), l.room_types.join(", ")),
                ("price_min".to_string(), price_cell(l.price_min)),
                ("price_max".to_string(), price_cell(l.price_max)),
                ("distance".to_string(), l.distance.clone()),
                ("wifi".to_string(), l.wifi.clone()),
                ("image".to_string(), l.image.clone()),
                ("description".to_string(), l.description.clone()),
            ])
        })
        .collect()
}

pub fn export_listings_csv(listings: &[Listing]) -> ResultResp {
    csv_response(records_to_csv(&listing_rows(listings)), "listings.csv")
}
