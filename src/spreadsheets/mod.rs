pub mod csv;
pub mod export_csv;

pub use csv::{parse_csv, records_to_csv, CsvRecord};
pub use export_csv::export_listings_csv;
