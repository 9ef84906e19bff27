// crates/advisory-core/src/source/http.rs
use crate::config::AdvisoryConfig;
use crate::error::Result;
use crate::model::AdvisoryCatalog;
use crate::traits::AdvisorySource;
use async_trait::async_trait;

/// The live advisory feed.
#[derive(Debug, Clone)]
pub struct HttpAdvisorySource {
    client: reqwest::Client,
    url: String,
}

impl HttpAdvisorySource {
    /// Client for `url` with the default timeouts.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let config = AdvisoryConfig {
            advisory_url: url.into(),
            ..AdvisoryConfig::default()
        };
        Self::from_config(&config)
    }

    pub fn from_config(config: &AdvisoryConfig) -> Result<Self> {
        Ok(Self {
            client: super::http_client(config)?,
            url: config.advisory_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AdvisorySource for HttpAdvisorySource {
    #[tracing::instrument(skip(self), fields(url = %self.url), level = "info")]
    async fn fetch_catalog(&self) -> Result<AdvisoryCatalog> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        let catalog = AdvisoryCatalog::from_json_slice(&bytes)?;
        tracing::info!(countries = catalog.len(), "advisory catalog fetched");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisoryError;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn fetches_and_parses_the_feed() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api");
                then.status(200).json_body(json!({
                    "api_status": {"request": {"item": null}},
                    "data": {
                        "FR": {"iso_alpha2": "FR", "name": "France",
                               "advisory": {"message": "Exercise normal precautions",
                                            "source": "https://x", "sources_active": 3}}
                    }
                }));
            })
            .await;

        let source = HttpAdvisorySource::new(server.url("/api")).unwrap();
        let catalog = source.fetch_catalog().await.unwrap();

        mock.assert_hits_async(1).await;
        assert_eq!(catalog.advisory_by_code("FR").unwrap().sources_active, 3);
    }

    #[tokio::test]
    async fn server_errors_are_fetch_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api");
                then.status(503);
            })
            .await;

        let source = HttpAdvisorySource::new(server.url("/api")).unwrap();
        let err = source.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, AdvisoryError::Fetch(_)), "{err:?}");
    }

    #[tokio::test]
    async fn malformed_bodies_are_parse_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let source = HttpAdvisorySource::new(server.url("/api")).unwrap();
        let err = source.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, AdvisoryError::Json(_)), "{err:?}");
    }

    #[tokio::test]
    async fn slow_upstream_times_out_as_fetch_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api");
                then.status(200)
                    .delay(std::time::Duration::from_secs(3))
                    .json_body(json!({"data": {}}));
            })
            .await;

        let config = AdvisoryConfig {
            advisory_url: server.url("/api"),
            http_timeout_secs: 1,
            ..AdvisoryConfig::default()
        };
        let source = HttpAdvisorySource::from_config(&config).unwrap();

        let started = std::time::Instant::now();
        let err = source.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, AdvisoryError::Fetch(_)), "{err:?}");
        assert!(started.elapsed() < std::time::Duration::from_secs(3));
    }
}
