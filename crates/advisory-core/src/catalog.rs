// crates/advisory-core/src/catalog.rs

//! # Advisory cache
//!
//! The advisory feed is fetched at most once per session. [`AdvisoryCache`]
//! owns that single catalog and is shared by the dropdown and the map-click
//! flows.
//!
//! - Concurrent first accesses share one fetch: the fetch runs under a gate,
//!   and callers that waited on the gate find the catalog already filled.
//! - A failed fetch leaves the cache empty, so the next access tries again.
//! - There is no TTL. [`AdvisoryCache::invalidate`] and
//!   [`AdvisoryCache::replace`] are the only ways to change a loaded catalog,
//!   and both swap the whole thing.

use crate::error::Result;
use crate::model::{AdvisoryCatalog, CountryAdvisory, CountryOption};
use crate::traits::AdvisorySource;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// One uncached fetch from `source`.
pub async fn load_catalog<S: AdvisorySource + ?Sized>(source: &S) -> Result<AdvisoryCatalog> {
    let catalog = source.fetch_catalog().await?;
    tracing::debug!(countries = catalog.len(), "advisory catalog loaded");
    Ok(catalog)
}

pub struct AdvisoryCache<S> {
    source: S,
    slot: RwLock<Option<Arc<AdvisoryCatalog>>>,
    fetch_gate: Mutex<()>,
    fetches: AtomicUsize,
}

impl<S: AdvisorySource> AdvisoryCache<S> {
    /// An empty cache; the first access fetches from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            slot: RwLock::new(None),
            fetch_gate: Mutex::new(()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// A cache that starts loaded. `source` is only used after
    /// [`invalidate`](Self::invalidate).
    pub fn with_catalog(source: S, catalog: AdvisoryCatalog) -> Self {
        let mut cache = Self::new(source);
        cache.slot = RwLock::new(Some(Arc::new(catalog)));
        cache
    }

    /// The session catalog, fetching it on first use.
    pub async fn catalog(&self) -> Result<Arc<AdvisoryCatalog>> {
        if let Some(catalog) = self.cached().await {
            tracing::debug!("advisory catalog cache hit");
            return Ok(catalog);
        }

        let _gate = self.fetch_gate.lock().await;
        // Whoever held the gate before us may have filled the slot.
        if let Some(catalog) = self.cached().await {
            return Ok(catalog);
        }

        self.fetches.fetch_add(1, Ordering::Relaxed);
        match load_catalog(&self.source).await {
            Ok(catalog) => {
                let catalog = Arc::new(catalog);
                *self.slot.write().await = Some(Arc::clone(&catalog));
                tracing::info!(countries = catalog.len(), "advisory catalog cached");
                Ok(catalog)
            }
            Err(err) => {
                tracing::warn!(error = %err, "advisory catalog fetch failed, will retry on next access");
                Err(err)
            }
        }
    }

    /// Advisory for a country code. `Ok(None)` means the feed has no such
    /// country; `Err` means the catalog could not be loaded.
    pub async fn advisory_by_code(&self, code: &str) -> Result<Option<CountryAdvisory>> {
        Ok(self.catalog().await?.advisory_by_code(code).cloned())
    }

    /// Advisory for an exact, case-sensitive country name.
    pub async fn advisory_by_name(&self, name: &str) -> Result<Option<CountryAdvisory>> {
        Ok(self.catalog().await?.advisory_by_name(name).cloned())
    }

    /// Dropdown entries, alphabetised by name.
    pub async fn options(&self) -> Result<Vec<CountryOption>> {
        Ok(self.catalog().await?.options())
    }

    pub async fn is_loaded(&self) -> bool {
        self.slot.read().await.is_some()
    }

    /// Drop the cached catalog; the next access fetches again.
    pub async fn invalidate(&self) {
        *self.slot.write().await = None;
        tracing::debug!("advisory catalog invalidated");
    }

    /// Swap in a complete catalog obtained elsewhere.
    pub async fn replace(&self, catalog: AdvisoryCatalog) {
        *self.slot.write().await = Some(Arc::new(catalog));
    }

    /// How many times the source has been asked for a catalog.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    async fn cached(&self) -> Option<Arc<AdvisoryCatalog>> {
        self.slot.read().await.clone()
    }
}
