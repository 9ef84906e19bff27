// crates/advisory-core/src/geocode/mod.rs

//! # Geocoding
//!
//! Forward (country name → coordinates) and reverse (coordinates → country
//! label) lookups against an OpenCage-shaped service. Only the first result
//! is ever used. The response parsers are plain functions so a page that
//! does its own fetching can still reuse them.

#[cfg(feature = "http")]
mod opencage;

#[cfg(feature = "http")]
pub use opencage::OpenCageGeocoder;

use crate::common::LatLng;
use crate::error::Result;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct GeocodeResponseRaw {
    #[serde(default)]
    pub results: Vec<GeocodeResultRaw>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResultRaw {
    #[serde(default)]
    pub geometry: Option<GeometryRaw>,
    #[serde(default)]
    pub components: Option<ComponentsRaw>,
    #[serde(default)]
    pub formatted: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeometryRaw {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct ComponentsRaw {
    #[serde(default)]
    pub country: Option<String>,
}

impl GeocodeResponseRaw {
    /// `results[0].geometry`, if any.
    pub fn first_position(&self) -> Option<LatLng> {
        self.results
            .first()
            .and_then(|r| r.geometry.as_ref())
            .map(|g| LatLng::new(g.lat, g.lng))
    }

    /// `results[0].components.country`, falling back to `results[0].formatted`.
    pub fn first_country_label(&self) -> Option<String> {
        let first = self.results.first()?;
        first
            .components
            .as_ref()
            .and_then(|c| c.country.as_deref())
            .or(first.formatted.as_deref())
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
    }
}

/// Parse a forward-geocoding response body.
pub fn parse_forward(json: &str) -> Result<Option<LatLng>> {
    let raw: GeocodeResponseRaw = serde_json::from_str(json)?;
    Ok(raw.first_position())
}

/// Parse a reverse-geocoding response body.
pub fn parse_reverse(json: &str) -> Result<Option<String>> {
    let raw: GeocodeResponseRaw = serde_json::from_str(json)?;
    Ok(raw.first_country_label())
}
