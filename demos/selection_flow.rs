//! Selection flow example for travel-advisory-map
//!
//! Runs the dropdown and map-click flows against the bundled snapshot, a
//! fixed-table geocoder and a map that prints what it would draw. No network
//! access is needed.

use async_trait::async_trait;
use travel_advisory_map::prelude::*;
use travel_advisory_map::JsonFileSource;

struct TableGeocoder;

const PLACES: &[(&str, f64, f64)] = &[
    ("France", 46.6, 1.9),
    ("Germany", 51.1, 10.4),
    ("Antarctica", -82.9, 135.0),
];

#[async_trait]
impl Geocoder for TableGeocoder {
    async fn forward(&self, place: &str) -> Result<Option<LatLng>> {
        Ok(PLACES
            .iter()
            .find(|(name, ..)| *name == place)
            .map(|&(_, lat, lng)| LatLng::new(lat, lng)))
    }

    async fn reverse(&self, at: LatLng) -> Result<Option<String>> {
        Ok(PLACES
            .iter()
            .find(|&&(_, lat, lng)| (lat - at.lat).abs() < 1.0 && (lng - at.lng).abs() < 1.0)
            .map(|(name, ..)| name.to_string()))
    }
}

struct PrintMap;

impl MapDisplay for PrintMap {
    fn show_marker(&self, at: LatLng, popup_html: &str) {
        println!("  marker @ {at}\n  {}", popup_html.replace('\n', "\n  "));
    }

    fn set_view(&self, at: LatLng, zoom: u8) {
        println!("  view   @ {at}, zoom {zoom}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Travel Advisory Map: Selection Flow ===\n");

    let cache = std::sync::Arc::new(AdvisoryCache::new(JsonFileSource::bundled_sample()));
    let controller = SelectionController::new(cache, TableGeocoder, PrintMap);

    for code in ["FR", "AQ", "ZZ"] {
        println!("dropdown: {code}");
        println!("  -> {:?}\n", controller.select_code(code).await);
    }

    println!("map click: 51.0, 10.0");
    println!("  -> {:?}\n", controller.select_at(LatLng::new(51.0, 10.0)).await);

    println!("current selection: {:?}", controller.selected().await);
    println!("catalog fetches: {}", controller.cache().fetch_count());
    Ok(())
}
