// crates/advisory-core/src/geocode/opencage.rs
use super::GeocodeResponseRaw;
use crate::common::LatLng;
use crate::config::AdvisoryConfig;
use crate::error::{AdvisoryError, Result};
use crate::traits::Geocoder;
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

/// Geocoder backed by the OpenCage `geocode/v1/json` endpoint.
#[derive(Debug, Clone)]
pub struct OpenCageGeocoder {
    client: reqwest::Client,
    url: String,
    api_key: Secret<String>,
}

impl OpenCageGeocoder {
    /// Requires `config.geocoder_api_key`.
    pub fn from_config(config: &AdvisoryConfig) -> Result<Self> {
        let api_key = config
            .geocoder_api_key
            .clone()
            .ok_or_else(|| AdvisoryError::Config("geocoder API key is not set".into()))?;
        Ok(Self {
            client: crate::source::http_client(config)?,
            url: config.geocoder_url.clone(),
            api_key,
        })
    }

    async fn query(&self, q: &str) -> Result<GeocodeResponseRaw> {
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("q", q),
                ("key", self.api_key.expose_secret().as_str()),
                ("limit", "1"),
                ("no_annotations", "1"),
            ])
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl Geocoder for OpenCageGeocoder {
    #[tracing::instrument(skip(self), level = "debug")]
    async fn forward(&self, place: &str) -> Result<Option<LatLng>> {
        let place = place.trim();
        if place.is_empty() {
            return Ok(None);
        }
        let position = self.query(place).await?.first_position();
        tracing::debug!(?position, "forward geocode");
        Ok(position)
    }

    #[tracing::instrument(skip(self), level = "debug")]
    async fn reverse(&self, at: LatLng) -> Result<Option<String>> {
        let q = format!("{},{}", at.lat, at.lng);
        let label = self.query(&q).await?.first_country_label();
        tracing::debug!(?label, "reverse geocode");
        Ok(label)
    }
}
