// crates/advisory-core/src/source/file.rs
use crate::error::{AdvisoryError, Result};
use crate::model::AdvisoryCatalog;
use crate::traits::AdvisorySource;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// A saved copy of the feed document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The sample snapshot shipped with the crate (`data/advisories.sample.json`).
    pub fn bundled_sample() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("advisories.sample.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Synchronous variant for callers without a runtime.
    pub fn load(&self) -> Result<AdvisoryCatalog> {
        let bytes = std::fs::read(&self.path).map_err(|e| self.read_error(e))?;
        AdvisoryCatalog::from_json_slice(&bytes)
    }

    fn read_error(&self, e: std::io::Error) -> AdvisoryError {
        AdvisoryError::Io(std::io::Error::new(
            e.kind(),
            format!("advisory file {}: {e}", self.path.display()),
        ))
    }
}

#[async_trait]
impl AdvisorySource for JsonFileSource {
    async fn fetch_catalog(&self) -> Result<AdvisoryCatalog> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| self.read_error(e))?;
        let catalog = AdvisoryCatalog::from_json_slice(&bytes)?;
        tracing::info!(path = %self.path.display(), countries = catalog.len(), "advisory catalog read from file");
        Ok(catalog)
    }
}
