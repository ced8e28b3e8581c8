use crate::errors::ServerError;
use crate::router::handle;
use crate::templates::html_error_response;
use crate::tests::utils::{body_string, get, request, sample_state};
use http::Method;

#[test]
fn refresh_swaps_state_and_redirects() {
    let state = sample_state();
    let before = state.snapshot().unwrap();

    let resp = handle(request(Method::POST, "/refresh"), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["Location"], "/");

    let after = state.snapshot().unwrap();
    assert!(!std::sync::Arc::ptr_eq(&before, &after));
    assert_eq!(after.listings, before.listings);
}

#[test]
fn wrong_method_and_unknown_path() {
    let state = sample_state();

    assert!(matches!(
        handle(get("/refresh"), &state),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        handle(get("/admin"), &state),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn errors_render_as_html_pages() {
    let resp = html_error_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));

    let resp = html_error_response(ServerError::BadRequest("missing listing id".into()));
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("missing listing id"));
}

#[test]
fn stylesheet_is_served() {
    let resp = handle(get("/static/main.css"), &sample_state()).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "text/css; charset=utf-8");
}
