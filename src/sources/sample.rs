use crate::domain::RawRecord;
use serde_json::{json, Value};

/// Bumped whenever the bundled records change.
pub const SAMPLE_VERSION: u32 = 1;

/// The sample listings bundled with the binary, in raw form so they go
/// through the same normalizer as every other source.
pub fn sample_records() -> Vec<RawRecord> {
    let data = json!([
        {
            "id": "patrick-rock",
            "title": "Patrick's Rock House",
            "tenant": "All Male",
            "room_types": ["Bedspace", "Solo"],
            "price_min": 1150,
            "price_max": 2000,
            "distance": "200 steps",
            "wifi": "Basic Access",
            "image": "https://via.placeholder.com/480x320?text=Patrick%27s+Rock+House",
            "description": "Cozy rock-house option. Bedspace and solo rooms available."
        },
        {
            "id": "squidward-head",
            "title": "Squidward's Head House",
            "tenant": "All Female",
            "room_types": ["Bedspace"],
            "price_min": 2300,
            "price_max": 2300,
            "distance": "250 steps",
            "wifi": "5G Converge",
            "image": "https://via.placeholder.com/480x320?text=Squidward%27s+Head+House",
            "description": "Quiet and tidy. Ideal for female tenants."
        },
        {
            "id": "patrick-stone",
            "title": "FrancisxLin Bh",
            "tenant": "All Male",
            "room_types": ["Bedspace", "Solo"],
            "price_min": 1150,
            "price_max": 2000,
            "distance": "200 steps",
            "wifi": "Basic Access",
            "image": "https://via.placeholder.com/480x320?text=FrancisxLin+Bh",
            "description": "Cozy rock-house option. Bedspace and solo rooms available."
        },
        {
            "id": "spongebob-pineapple",
            "title": "Spongebob's Pineapple House",
            "tenant": "Mixed",
            "room_types": ["Bedspace", "Studio"],
            "price_min": 2000,
            "price_max": 5700,
            "distance": "100 steps",
            "wifi": "5G PLDT",
            "image": "https://via.placeholder.com/480x320?text=Spongebob%27s+Pineapple+House",
            "description": "Unique pineapple structure with beach access and bright spaces."
        }
    ]);

    match data {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
