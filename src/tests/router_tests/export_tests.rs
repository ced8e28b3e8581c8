use crate::domain::Listing;
use crate::router::handle;
use crate::tests::utils::{body_string, get, sample_ids, sample_state};

#[test]
fn listings_json_serves_the_canonical_set() {
    let state = sample_state();
    let resp = handle(get("/listings.json"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "application/json");

    let listings: Vec<Listing> = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(listings, state.snapshot().unwrap().listings);
    assert_eq!(
        sample_ids(&listings),
        vec!["patrick-rock", "squidward-head", "patrick-stone", "spongebob-pineapple"]
    );
}

#[test]
fn listings_csv_is_a_download() {
    let state = sample_state();
    let resp = handle(get("/listings.csv"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Disposition"],
        "attachment; filename=\"listings.csv\""
    );

    let body = body_string(resp);
    let mut lines = body.lines();
    assert_eq!(
        lines.next(),
        Some("description,distance,id,image,price_max,price_min,room_types,tenant_type,title,wifi")
    );
    assert_eq!(lines.count(), 4);
}
