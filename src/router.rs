use crate::domain::{filter_listings, FilterCriteria};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, redirect_response, ResultResp};
use crate::spreadsheets::export_listings_csv;
use crate::state::AppState;
use crate::templates::components::FilterOptions;
use crate::templates::pages::{detail_page, home_page, HomeVm};
use astra::{Body, Request, ResponseBuilder};
use tracing::debug;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!(%method, %path, "request");

    match (method, path) {
        ("GET", "/") => {
            let resolved = state.snapshot()?;
            let criteria = FilterCriteria::from_query(parse_query(&req));
            let filtered = filter_listings(&resolved.listings, &criteria);

            html_response(home_page(&HomeVm {
                listings: &filtered,
                total: resolved.listings.len(),
                criteria: &criteria,
                options: FilterOptions::from_listings(&resolved.listings),
                status: &resolved.status,
                resolved_at: resolved.resolved_at,
            }))
        }

        ("GET", "/listings.json") => json_response(&state.snapshot()?.listings),

        ("GET", "/listings.csv") => export_listings_csv(&state.snapshot()?.listings),

        ("POST", "/refresh") => {
            state.refresh()?;
            redirect_response("/")
        }

        ("GET", "/static/main.css") => ResponseBuilder::new()
            .status(200)
            .header("Content-Type", mime::TEXT_CSS_UTF_8.to_string())
            .body(Body::from(MAIN_CSS))
            .map_err(|_| ServerError::InternalError),

        ("GET", "/listing") => {
            let id = parse_query(&req)
                .into_iter()
                .find(|(k, _)| k == "id")
                .map(|(_, v)| v)
                .ok_or_else(|| ServerError::BadRequest("missing listing id".into()))?;
            let resolved = state.snapshot()?;
            let listing = resolved.find(&id).ok_or(ServerError::NotFound)?;
            html_response(detail_page(listing))
        }

        (_, "/" | "/listing" | "/listings.json" | "/listings.csv" | "/refresh") => Err(
            ServerError::BadRequest(format!("{method} is not supported on {path}")),
        ),

        _ => Err(ServerError::NotFound),
    }
}

/// Decoded `key=value` pairs of the query string, repeats kept.
pub fn parse_query(req: &Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Link to the detail page of a listing.
pub fn listing_href(id: &str) -> String {
    let id: String = url::form_urlencoded::byte_serialize(id.as_bytes()).collect();
    format!("/listing?id={id}")
}
