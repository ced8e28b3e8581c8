// fetcher.rs
use crate::sources::SourceError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL};
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("gabaybahay/", env!("CARGO_PKG_VERSION"));

/// Reads the raw text of a listing source.
pub trait Fetch: Send + Sync {
    fn fetch_text(&self, location: &str) -> Result<String, SourceError>;
}

/// Fetches `http(s)://` locations with reqwest and treats anything else as a
/// local file path.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    fn fetch_url(&self, url: Url) -> Result<String, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/csv, text/plain;q=0.9, */*;q=0.5"),
        );

        let resp = self
            .client
            .get(url)
            .headers(headers)
            .send()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        resp.text().map_err(|e| SourceError::Network(e.to_string()))
    }
}

impl Fetch for HttpFetcher {
    fn fetch_text(&self, location: &str) -> Result<String, SourceError> {
        match remote_url(location) {
            Some(url) => self.fetch_url(url),
            None => std::fs::read_to_string(location).map_err(|e| SourceError::Io(e.to_string())),
        }
    }
}

/// `Some` when `location` is an absolute http(s) URL.
pub fn remote_url(location: &str) -> Option<Url> {
    Url::parse(location)
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https"))
}
