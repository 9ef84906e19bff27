// crates/advisory-core/src/model/raw.rs
use serde::Deserialize;
use std::collections::BTreeMap;

/// Envelope of the advisory feed:
/// {
///   "api_status": { ... },
///   "data": { "FR": { "iso_alpha2": "FR", "name": "France", "advisory": { ... } } }
/// }
/// NOTE: This type mirrors the external feed. Only `data` is read.
#[derive(Debug, Deserialize)]
pub struct AdvisoryResponseRaw {
    pub data: BTreeMap<String, CountryRaw>,
}

/// One country entry of the feed, keyed by its ISO-3166 alpha-2 code.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    #[serde(default)]
    pub iso_alpha2: Option<String>,
    pub name: String,
    #[serde(default)]
    pub continent: Option<String>,
    pub advisory: AdvisoryRaw,
}

/// The `advisory` object nested in each country entry.
#[derive(Debug, Deserialize)]
pub struct AdvisoryRaw {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub sources_active: u32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub source: String,
}
