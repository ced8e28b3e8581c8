// config.rs
use crate::sources::{remote_url, DataSource, SourceKind};
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_LISTINGS_SOURCE: &str = "listings.json";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var}: invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    /// Path or http(s) URL of the JSON listing array.
    pub listings_source: String,
    /// Published spreadsheet CSV; the CSV source is skipped when unset.
    pub sheet_csv_url: Option<String>,
    pub source_order: Vec<SourceKind>,
    pub fetch_timeout: Duration,
    pub max_workers: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let addr_raw = get("GABAYBAHAY_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw
            .parse::<SocketAddr>()
            .map_err(|e| invalid("GABAYBAHAY_ADDR", &addr_raw, e))?;

        let sheet_csv_url = match get("GABAYBAHAY_SHEET_CSV_URL") {
            Some(url) if remote_url(&url).is_none() => {
                return Err(invalid(
                    "GABAYBAHAY_SHEET_CSV_URL",
                    &url,
                    "must be an absolute http(s) URL",
                ))
            }
            other => other,
        };

        let source_order = match get("GABAYBAHAY_SOURCE_ORDER") {
            Some(raw) => raw
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.parse::<SourceKind>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| invalid("GABAYBAHAY_SOURCE_ORDER", &raw, e))?,
            None => vec![
                SourceKind::SheetCsv,
                SourceKind::ListingsJson,
                SourceKind::Embedded,
            ],
        };

        let fetch_timeout = match get("GABAYBAHAY_FETCH_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| invalid("GABAYBAHAY_FETCH_TIMEOUT_SECS", &raw, e))?,
            None => Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        };

        let max_workers = match get("GABAYBAHAY_MAX_WORKERS") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(0) => return Err(invalid("GABAYBAHAY_MAX_WORKERS", &raw, "must be at least 1")),
                Ok(n) => n,
                Err(e) => return Err(invalid("GABAYBAHAY_MAX_WORKERS", &raw, e)),
            },
            None => DEFAULT_MAX_WORKERS,
        };

        Ok(Self {
            addr,
            listings_source: get("GABAYBAHAY_LISTINGS_SOURCE")
                .unwrap_or_else(|| DEFAULT_LISTINGS_SOURCE.to_string()),
            sheet_csv_url,
            source_order,
            fetch_timeout,
            max_workers,
        })
    }

    /// The fallback chain in configured order. Duplicates keep their first
    /// position.
    pub fn sources(&self) -> Vec<DataSource> {
        let mut sources: Vec<DataSource> = Vec::new();

        for kind in &self.source_order {
            if sources.iter().any(|s| s.kind == *kind) {
                continue;
            }
            let location = match kind {
                SourceKind::SheetCsv => self.sheet_csv_url.clone(),
                SourceKind::ListingsJson => Some(self.listings_source.clone()),
                SourceKind::Embedded => None,
            };
            sources.push(DataSource {
                kind: *kind,
                location,
            });
        }

        sources
    }
}

fn invalid(var: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
