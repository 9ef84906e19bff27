// crates/advisory-core/src/error.rs
use thiserror::Error;

/// Failures while fetching or parsing advisory and geocoding data.
///
/// Lookup misses and unclassified zoom levels are not errors; they come back
/// as `None` from the lookup and classification functions.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    /// Network failure, timeout or non-success HTTP status.
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload parsed but broke an invariant (e.g. a code in two zoom tiers).
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for AdvisoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return AdvisoryError::InvalidData(err.to_string());
        }
        AdvisoryError::Fetch(err.to_string())
    }
}

impl AdvisoryError {
    /// True for failures that may go away on the next attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, AdvisoryError::Fetch(_) | AdvisoryError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, AdvisoryError>;
