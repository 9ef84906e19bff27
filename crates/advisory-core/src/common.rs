use serde::{Deserialize, Serialize};
use std::fmt;

/// Simple aggregate statistics for a loaded catalog.
///
/// Returned by [`AdvisoryCatalog::stats`](crate::AdvisoryCatalog::stats).
/// `unclassified` counts catalog entries with no zoom tier, which the map
/// cannot recentre on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub countries: usize,
    pub with_sources: usize,
    pub unclassified: usize,
}

/// A point on the map, as returned by forward geocoding or a map click.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}
