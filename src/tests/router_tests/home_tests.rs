// src/tests/router_tests/home_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, json_state, sample_state};

fn home(query: &str) -> String {
    let state = sample_state();
    let resp = handle(get(&format!("/{query}")), &state).unwrap();
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

fn shows(body: &str, id: &str) -> bool {
    body.contains(&format!("/listing?id={id}\""))
}

#[test]
fn home_lists_every_sample_listing() {
    let body = home("");

    for id in ["patrick-rock", "squidward-head", "patrick-stone", "spongebob-pineapple"] {
        assert!(shows(&body, id), "missing {id}");
    }
    assert!(body.contains("Using sample embedded listings"));
    assert!(body.contains("Showing 4 of 4 listings"));
}

#[test]
fn budget_filter_uses_lowest_price() {
    let body = home("?max_budget=1500");

    assert!(shows(&body, "patrick-rock"));
    assert!(shows(&body, "patrick-stone"));
    assert!(!shows(&body, "squidward-head"));
    assert!(!shows(&body, "spongebob-pineapple"));
}

#[test]
fn tenant_and_room_filters_combine() {
    let body = home("?tenant=All+Female");
    assert!(shows(&body, "squidward-head"));
    assert!(body.contains("Showing 1 of 4 listings"));

    let body = home("?room=Studio");
    assert!(shows(&body, "spongebob-pineapple"));
    assert!(body.contains("Showing 1 of 4 listings"));

    let body = home("?tenant=All+Male&room=Solo&max_budget=1000");
    assert!(body.contains("No listings match your filters."));
}

#[test]
fn filter_bar_keeps_the_selection() {
    let body = home("?max_budget=2500&tenant=Mixed");

    assert!(body.contains(r#"value="2500""#));
    assert!(body.contains(r#"<option value="Mixed" selected>"#));
}

#[test]
fn json_source_listings_are_rendered() {
    let state = json_state(r#"[{"name":"Sandy's Treedome","Price":"3,100","Room":"Solo"}]"#);
    let body = body_string(handle(get("/"), &state).unwrap());

    assert!(body.contains("Loaded listings from listings.json"));
    assert!(body.contains("₱3,100"));
    assert!(body.contains("Showing 1 of 1 listings"));
}

#[test]
fn huge_prices_render_without_panicking() {
    let state = json_state(r#"[{"title":"Mansion","price":1e20}]"#);
    let resp = handle(get("/"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("₱100,000,000,000,000,000,000"));
}
