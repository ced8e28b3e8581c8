use crate::errors::ServerError;
use crate::router::{handle, listing_href};
use crate::tests::utils::{body_string, get, json_state, sample_state};

#[test]
fn detail_page_shows_the_listing() {
    let state = sample_state();
    let resp = handle(get("/listing?id=patrick-rock"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Bedspace, Solo"));
    assert!(body.contains("₱1,150 — ₱2,000"));
    assert!(body.contains("200 steps • Basic Access"));
}

#[test]
fn unknown_or_missing_id() {
    let state = sample_state();

    assert!(matches!(
        handle(get("/listing?id=nope"), &state),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(get("/listing"), &state),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn ids_with_reserved_characters_round_trip_through_links() {
    let state = json_state(r#"[{"title":"Mr. Krabs' Loft & Co"}]"#);
    let id = state.snapshot().unwrap().listings[0].id.clone();
    assert_eq!(id, "mr.-krabs'-loft-&-co");

    let resp = handle(get(&listing_href(&id)), &state).unwrap();
    assert_eq!(resp.status(), 200);
}
