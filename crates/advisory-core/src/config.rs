// crates/advisory-core/src/config.rs
use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ADVISORY_URL: &str = "https://www.travel-advisory.info/api";
pub const DEFAULT_GEOCODER_URL: &str = "https://api.opencagedata.com/geocode/v1/json";

pub const DEFAULT_UPSTREAM_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 3;

/// Endpoints, credentials and timeouts for the two upstream services.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    pub advisory_url: String,
    pub geocoder_url: String,
    /// OpenCage key. Reverse and forward geocoding are unavailable without it.
    pub geocoder_api_key: Option<Secret<String>>,
    pub http_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            advisory_url: DEFAULT_ADVISORY_URL.to_string(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            geocoder_api_key: None,
            http_timeout_secs: DEFAULT_UPSTREAM_HTTP_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl AdvisoryConfig {
    /// Defaults overridden by `ADVISORY_URL`, `GEOCODER_URL`,
    /// `OPENCAGE_API_KEY`, `UPSTREAM_HTTP_TIMEOUT_SECS` and
    /// `UPSTREAM_CONNECT_TIMEOUT_SECS`. Unparsable or zero timeouts fall back
    /// to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let secs = |key: &str, fallback: u64| {
            non_empty(key)
                .and_then(|value| value.parse::<u64>().ok())
                .filter(|value| *value > 0)
                .unwrap_or(fallback)
        };

        Self {
            advisory_url: non_empty("ADVISORY_URL").unwrap_or(defaults.advisory_url),
            geocoder_url: non_empty("GEOCODER_URL").unwrap_or(defaults.geocoder_url),
            geocoder_api_key: non_empty("OPENCAGE_API_KEY").map(Secret::new),
            http_timeout_secs: secs("UPSTREAM_HTTP_TIMEOUT_SECS", defaults.http_timeout_secs),
            connect_timeout_secs: secs(
                "UPSTREAM_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            ),
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = AdvisoryConfig::from_lookup(lookup(&[]));
        assert_eq!(config.advisory_url, DEFAULT_ADVISORY_URL);
        assert!(config.geocoder_api_key.is_none());
        assert_eq!(config.http_timeout(), Duration::from_secs(10));
        assert_eq!(config.connect_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn environment_overrides() {
        let config = AdvisoryConfig::from_lookup(lookup(&[
            ("ADVISORY_URL", "http://localhost:9000/api"),
            ("OPENCAGE_API_KEY", " abc123 "),
            ("UPSTREAM_HTTP_TIMEOUT_SECS", "25"),
        ]));
        assert_eq!(config.advisory_url, "http://localhost:9000/api");
        assert_eq!(
            config.geocoder_api_key.as_ref().map(|k| k.expose_secret().as_str()),
            Some("abc123")
        );
        assert_eq!(config.http_timeout_secs, 25);
    }

    #[test]
    fn bad_timeouts_fall_back() {
        let config = AdvisoryConfig::from_lookup(lookup(&[
            ("UPSTREAM_HTTP_TIMEOUT_SECS", "0"),
            ("UPSTREAM_CONNECT_TIMEOUT_SECS", "soon"),
            ("OPENCAGE_API_KEY", "   "),
        ]));
        assert_eq!(config.http_timeout_secs, DEFAULT_UPSTREAM_HTTP_TIMEOUT_SECS);
        assert_eq!(config.connect_timeout_secs, DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS);
        assert!(config.geocoder_api_key.is_none());
    }
}
