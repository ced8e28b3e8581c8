use crate::config::Config;
use crate::router::handle;
use crate::sources::{HttpFetcher, SourceResolver};
use crate::state::AppState;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod sources;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gabaybahay=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let fetcher = match HttpFetcher::new(config.fetch_timeout) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!(error = %e, "could not build HTTP client");
            std::process::exit(1);
        }
    };

    // Resolve once up front; the embedded sample guarantees a listing set.
    let state = Arc::new(AppState::load(SourceResolver::new(
        Box::new(fetcher),
        config.sources(),
    )));

    info!(addr = %config.addr, workers = config.max_workers, "starting server");

    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
