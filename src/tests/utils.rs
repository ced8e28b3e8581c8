use crate::domain::Listing;
use crate::sources::{DataSource, Fetch, SourceError, SourceKind, SourceResolver};
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};

/// Serves canned bodies by location and records every requested location.
/// Unknown locations behave like a refused connection.
#[derive(Default)]
pub struct StubFetcher {
    bodies: HashMap<String, Result<String, u16>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubFetcher {
    pub fn with(mut self, location: &str, body: Result<&str, u16>) -> Self {
        self.bodies
            .insert(location.to_string(), body.map(str::to_string));
        self
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

impl Fetch for StubFetcher {
    fn fetch_text(&self, location: &str) -> Result<String, SourceError> {
        self.calls.lock().unwrap().push(location.to_string());
        match self.bodies.get(location) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(SourceError::Status(*status)),
            None => Err(SourceError::Network("connection refused".into())),
        }
    }
}

/// App state backed only by the embedded sample listings.
pub fn sample_state() -> AppState {
    AppState::load(SourceResolver::new(
        Box::new(StubFetcher::default()),
        Vec::new(),
    ))
}

/// App state whose JSON source serves `body`.
pub fn json_state(body: &str) -> AppState {
    AppState::load(SourceResolver::new(
        Box::new(StubFetcher::default().with("listings.json", Ok(body))),
        vec![DataSource {
            kind: SourceKind::ListingsJson,
            location: Some("listings.json".to_string()),
        }],
    ))
}

pub fn sample_ids(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.id.as_str()).collect()
}

pub fn get(path: &str) -> Request {
    request(Method::GET, path)
}

pub fn request(method: Method, path: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

/// Reads the whole response body as UTF-8.
pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}
