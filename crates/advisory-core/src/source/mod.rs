// crates/advisory-core/src/source/mod.rs

//! # Catalog sources
//!
//! Two ways to obtain the advisory document: the live feed over HTTP
//! (feature `http`) and a JSON file on disk with the same shape, for offline
//! runs and demos (feature `fs`).

#[cfg(feature = "fs")]
mod file;
#[cfg(feature = "http")]
mod http;

#[cfg(feature = "fs")]
pub use file::JsonFileSource;
#[cfg(feature = "http")]
pub use http::HttpAdvisorySource;

#[cfg(feature = "http")]
pub(crate) fn http_client(config: &crate::AdvisoryConfig) -> crate::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.http_timeout())
        .connect_timeout(config.connect_timeout())
        .user_agent(concat!("advisory-core/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| crate::AdvisoryError::Config(format!("failed to build HTTP client: {e}")))
}
