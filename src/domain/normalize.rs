// src/domain/normalize.rs

use crate::domain::listing::Listing;
use crate::spreadsheets::CsvRecord;
use serde_json::{Map, Value};
use std::collections::HashSet;

pub type RawRecord = Map<String, Value>;

pub const DEFAULT_TITLE: &str = "Listing";
pub const DEFAULT_TENANT_TYPE: &str = "Mixed";
pub const DEFAULT_ROOM_TYPE: &str = "Bedspace";
const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/480x320?text=";

/// Canonical fields that can be read from a raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Title,
    Price,
    PriceMin,
    PriceMax,
    RoomTypes,
    TenantType,
    Image,
    Distance,
    Wifi,
    Description,
}

/// Candidate source keys per field, in priority order.
///
/// Keys are stored folded (see [`fold_key`]), so `price_min`, `priceMin`,
/// `PriceMin` and `Price Min` all hit the `pricemin` entry.
pub const SYNONYMS: &[(Field, &[&str])] = &[
    (Field::Id, &["id", "listingid"]),
    (Field::Title, &["title", "name"]),
    (Field::Price, &["price", "rent"]),
    (Field::PriceMin, &["pricemin", "minprice", "pricefrom"]),
    (Field::PriceMax, &["pricemax", "maxprice", "priceto"]),
    (Field::RoomTypes, &["roomtypes", "roomtype", "room", "rooms"]),
    (Field::TenantType, &["tenanttype", "tenant"]),
    (Field::Image, &["image", "imageurl", "photo"]),
    (Field::Distance, &["distance"]),
    (Field::Wifi, &["wifi", "wifitype", "internet"]),
    (Field::Description, &["description", "features", "details"]),
];

pub fn synonyms(field: Field) -> &'static [&'static str] {
    SYNONYMS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, keys)| *keys)
        .unwrap_or(&[])
}

/// Lowercases a key and drops `_`, `-` and whitespace.
pub fn fold_key(key: &str) -> String {
    key.chars()
        .filter(|c| !(c.is_whitespace() || *c == '_' || *c == '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Reads `field` from `record`: the first candidate key whose value survives
/// `coerce` wins.
fn resolve<T>(record: &RawRecord, field: Field, coerce: fn(&Value) -> Option<T>) -> Option<T> {
    synonyms(field).iter().find_map(|candidate| {
        record
            .iter()
            .filter(|(key, _)| fold_key(key) == *candidate)
            .find_map(|(_, value)| coerce(value))
    })
}

pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(coerce_text).collect();
            Some(parts.join(", ")).filter(|s| !s.is_empty())
        }
        Value::Null | Value::Object(_) => None,
    }
}

/// Numeric coercion. Strings lose everything except digits and `.` first,
/// so `"₱2,300"` reads as 2300. Anything unparsable is `None`.
pub fn coerce_price(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            cleaned.parse::<f64>().ok()?
        }
        _ => return None,
    };

    (n.is_finite() && n >= 0.0).then_some(n)
}

pub fn coerce_list(value: &Value) -> Option<Vec<String>> {
    let entries: Vec<String> = match value {
        Value::Array(items) => items.iter().filter_map(coerce_text).collect(),
        Value::String(s) => s
            .split([',', '/'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => return None,
    };

    let mut seen = HashSet::new();
    let deduped: Vec<String> = entries
        .into_iter()
        .filter(|e| seen.insert(e.to_lowercase()))
        .collect();

    (!deduped.is_empty()).then_some(deduped)
}

/// Lowercased title with whitespace runs collapsed to `-`.
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

pub fn placeholder_image(title: &str) -> String {
    let text: String = url::form_urlencoded::byte_serialize(title.as_bytes()).collect();
    format!("{PLACEHOLDER_IMAGE}{text}")
}

/// Maps one raw record to a canonical [`Listing`].
///
/// Total: every record, however sparse, yields a listing with all fields
/// populated by defaults. `index` is the record's position in its source
/// and only matters when neither an id nor a title is present.
pub fn normalize_record(record: &RawRecord, index: usize) -> Listing {
    let title_field = resolve(record, Field::Title, coerce_text);

    let id = resolve(record, Field::Id, coerce_text)
        .or_else(|| title_field.as_deref().map(slugify))
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| format!("listing-{}", index + 1));

    let title = title_field.unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let (price_min, price_max) = match resolve(record, Field::Price, coerce_price) {
        Some(price) => (Some(price), Some(price)),
        None => {
            let min = resolve(record, Field::PriceMin, coerce_price);
            let max = resolve(record, Field::PriceMax, coerce_price);
            match (min, max) {
                (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
                (Some(lo), Some(hi)) => (Some(lo), Some(hi)),
                (Some(p), None) | (None, Some(p)) => (Some(p), Some(p)),
                (None, None) => (None, None),
            }
        }
    };

    let image =
        resolve(record, Field::Image, coerce_text).unwrap_or_else(|| placeholder_image(&title));

    Listing {
        id,
        room_types: resolve(record, Field::RoomTypes, coerce_list)
            .unwrap_or_else(|| vec![DEFAULT_ROOM_TYPE.to_string()]),
        tenant_type: resolve(record, Field::TenantType, coerce_text)
            .unwrap_or_else(|| DEFAULT_TENANT_TYPE.to_string()),
        price_min,
        price_max,
        distance: resolve(record, Field::Distance, coerce_text).unwrap_or_default(),
        wifi: resolve(record, Field::Wifi, coerce_text).unwrap_or_default(),
        description: resolve(record, Field::Description, coerce_text).unwrap_or_default(),
        image,
        title,
    }
}

/// Normalizes a whole source, keeping ids unique within the set.
pub fn normalize_records<'a, I>(records: I) -> Vec<Listing>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut seen = HashSet::new();

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let mut listing = normalize_record(record, index);
            if !seen.insert(listing.id.clone()) {
                let base = listing.id.clone();
                let mut n = 2;
                while !seen.insert(format!("{base}-{n}")) {
                    n += 1;
                }
                listing.id = format!("{base}-{n}");
            }
            listing
        })
        .collect()
}

/// CSV rows are plain string maps; lift them into raw records.
pub fn csv_to_raw(record: &CsvRecord) -> RawRecord {
    record
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect()
}
