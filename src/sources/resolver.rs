// resolver.rs
use crate::domain::{csv_to_raw, normalize_records, Listing, RawRecord};
use crate::sources::sample::{sample_records, SAMPLE_VERSION};
use crate::sources::{Fetch, SourceError};
use crate::spreadsheets::parse_csv;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    SheetCsv,
    ListingsJson,
    Embedded,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::SheetCsv => write!(f, "csv"),
            SourceKind::ListingsJson => write!(f, "json"),
            SourceKind::Embedded => write!(f, "embedded"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" | "sheet" => Ok(SourceKind::SheetCsv),
            "json" => Ok(SourceKind::ListingsJson),
            "embedded" | "sample" => Ok(SourceKind::Embedded),
            other => Err(format!("unknown source '{other}'")),
        }
    }
}

/// One entry of the fallback chain. `location` is `None` for the embedded
/// sample and for a spreadsheet nobody configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub kind: SourceKind,
    pub location: Option<String>,
}

/// Outcome of a resolution: the listing set plus a human-readable status.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub listings: Vec<Listing>,
    pub source: SourceKind,
    pub status: String,
    pub resolved_at: DateTime<Utc>,
}

impl Resolved {
    pub fn find(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }
}

pub struct SourceResolver {
    fetcher: Box<dyn Fetch>,
    sources: Vec<DataSource>,
}

impl SourceResolver {
    /// The embedded sample is appended when `sources` leaves it out, so the
    /// chain always ends on something that cannot fail.
    pub fn new(fetcher: Box<dyn Fetch>, mut sources: Vec<DataSource>) -> Self {
        if !sources.iter().any(|s| s.kind == SourceKind::Embedded) {
            sources.push(DataSource {
                kind: SourceKind::Embedded,
                location: None,
            });
        }

        Self { fetcher, sources }
    }

    /// Walks the sources in order and returns the first that yields listings.
    pub fn resolve(&self) -> Resolved {
        let mut failures = Vec::new();

        for source in &self.sources {
            let attempt = match (source.kind, source.location.as_deref()) {
                (SourceKind::Embedded, _) => break,
                (kind, None) => {
                    debug!(source = %kind, "source not configured, skipping");
                    continue;
                }
                (SourceKind::SheetCsv, Some(location)) => self.load_csv(location),
                (SourceKind::ListingsJson, Some(location)) => self.load_json(location),
            };

            let location = source.location.as_deref().unwrap_or_default();
            match attempt {
                Ok(listings) => {
                    info!(source = %source.kind, %location, count = listings.len(), "loaded listings");
                    return Resolved {
                        status: success_status(source.kind, location),
                        listings,
                        source: source.kind,
                        resolved_at: Utc::now(),
                    };
                }
                Err(e) => {
                    warn!(source = %source.kind, %location, error = %e, "source unavailable");
                    failures.push(source.kind);
                }
            }
        }

        let listings = normalize_records(&sample_records());
        info!(version = SAMPLE_VERSION, count = listings.len(), "using embedded sample listings");

        Resolved {
            status: fallback_status(&failures),
            listings,
            source: SourceKind::Embedded,
            resolved_at: Utc::now(),
        }
    }

    fn load_csv(&self, location: &str) -> Result<Vec<Listing>, SourceError> {
        let text = self.fetcher.fetch_text(location)?;
        let raws: Vec<RawRecord> = parse_csv(&text).iter().map(csv_to_raw).collect();
        non_empty(normalize_records(&raws))
    }

    fn load_json(&self, location: &str) -> Result<Vec<Listing>, SourceError> {
        let text = self.fetcher.fetch_text(location)?;
        let data: Value =
            serde_json::from_str(&text).map_err(|e| SourceError::JsonParse(e.to_string()))?;

        let items = match data {
            Value::Array(items) => items,
            other => {
                return Err(SourceError::UnexpectedShape(format!(
                    "expected a JSON array, got {}",
                    json_kind(&other)
                )))
            }
        };

        let raws: Vec<RawRecord> = items
            .into_iter()
            .enumerate()
            .filter_map(|(i, item)| match item {
                Value::Object(map) => Some(map),
                other => {
                    warn!(index = i, kind = json_kind(&other), "skipping non-object listing");
                    None
                }
            })
            .collect();

        non_empty(normalize_records(&raws))
    }
}

fn non_empty(listings: Vec<Listing>) -> Result<Vec<Listing>, SourceError> {
    if listings.is_empty() {
        Err(SourceError::Empty)
    } else {
        Ok(listings)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn success_status(kind: SourceKind, location: &str) -> String {
    match kind {
        SourceKind::SheetCsv => "Loaded listings from published Google Sheet CSV.".to_string(),
        _ => format!("Loaded listings from {location}"),
    }
}

fn fallback_status(failures: &[SourceKind]) -> String {
    if failures.is_empty() {
        "Using sample embedded listings (no listings.json or Google Sheet).".to_string()
    } else {
        let tried: Vec<String> = failures.iter().map(|k| k.to_string()).collect();
        format!(
            "Could not load listings ({} unavailable); using sample data.",
            tried.join(", ")
        )
    }
}
