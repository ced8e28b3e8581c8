use crate::errors::ServerError;
use crate::sources::{Resolved, SourceResolver};
use std::sync::{Arc, RwLock};
use tracing::{error, info};

/// Owns the resolver and the listing set it last produced.
///
/// Readers take a cheap `Arc` snapshot; a refresh resolves without holding
/// the lock and then swaps the whole set.
pub struct AppState {
    resolver: SourceResolver,
    current: RwLock<Arc<Resolved>>,
}

impl AppState {
    pub fn load(resolver: SourceResolver) -> Self {
        let resolved = resolver.resolve();
        info!(source = %resolved.source, status = %resolved.status, "listing set ready");

        Self {
            resolver,
            current: RwLock::new(Arc::new(resolved)),
        }
    }

    pub fn snapshot(&self) -> Result<Arc<Resolved>, ServerError> {
        let guard = self.current.read().map_err(|_| {
            error!("listing state lock poisoned");
            ServerError::InternalError
        })?;
        Ok(Arc::clone(&guard))
    }

    pub fn refresh(&self) -> Result<Arc<Resolved>, ServerError> {
        let resolved = Arc::new(self.resolver.resolve());

        let mut guard = self.current.write().map_err(|_| {
            error!("listing state lock poisoned");
            ServerError::InternalError
        })?;
        *guard = Arc::clone(&resolved);

        info!(source = %resolved.source, count = resolved.listings.len(), "listing set refreshed");
        Ok(resolved)
    }
}
