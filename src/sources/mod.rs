mod fetcher;
mod resolver;
mod sample;
mod source_error;

pub use fetcher::{remote_url, Fetch, HttpFetcher};
pub use resolver::{DataSource, Resolved, SourceKind, SourceResolver};
pub use source_error::SourceError;
