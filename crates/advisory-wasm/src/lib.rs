//! advisory-wasm — WebAssembly bindings for advisory-core
//!
//! The browser page keeps its map widget, dropdown and modal in JavaScript
//! and calls into this module for the parts with real logic: the session
//! advisory catalog, popup composition, dropdown filtering and the zoom
//! classifier.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Catalog: `load_catalog(feedJson)`, `is_catalog_loaded()`,
//!   `advisory_by_code("FR")`, `advisory_by_name("France")`
//! - Dropdown: `country_options("ger")` returning `{code, name}` objects
//! - Popup: `popup_html("FR")`
//! - Zoom: `classify_zoom("US")` → `3`, `zoom_tier("US")` → `"xxl"`
//! - Geocoder responses: `parse_forward_response(json)`,
//!   `parse_reverse_response(json)`, `resolve_click_label(label)`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { load_catalog, popup_html, classify_zoom } from 'advisory-wasm';
//!
//! await init();
//! const feed = await (await fetch('https://www.travel-advisory.info/api')).text();
//! load_catalog(feed);
//!
//! const zoom = classify_zoom('FR');      // 5, or undefined: keep current zoom
//! marker.bindPopup(popup_html('FR')).openPopup();
//! ```
//!
//! Notes
//! -----
//! - The catalog is loaded once per page session. Calling `load_catalog`
//!   again replaces it as a whole.
//! - Functions returning objects hand back `JsValue`s built with
//!   `serde-wasm-bindgen`; misses are `null`/`undefined`, not errors.

use advisory_core::geocode::{parse_forward, parse_reverse};
use advisory_core::prelude::*;
use advisory_core::resolve_label;
use std::result::Result;
use serde_wasm_bindgen::to_value;
use std::sync::{Arc, RwLock};
use wasm_bindgen::prelude::*;

// Session catalog. Replaced wholesale, never patched.
static CATALOG: RwLock<Option<Arc<AdvisoryCatalog>>> = RwLock::new(None);

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing advisory WASM module...".into());
}

fn catalog() -> Option<Arc<AdvisoryCatalog>> {
    CATALOG.read().ok().and_then(|slot| slot.clone())
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/* --------------------------------------------------------------------------
   Catalog
-------------------------------------------------------------------------- */

/// Parse the advisory feed document and make it the session catalog.
/// Returns the number of countries.
#[wasm_bindgen]
pub fn load_catalog(feed_json: &str) -> Result<usize, JsValue> {
    let parsed = AdvisoryCatalog::from_json_str(feed_json).map_err(js_error)?;
    let count = parsed.len();
    let mut slot = CATALOG.write().map_err(js_error)?;
    *slot = Some(Arc::new(parsed));

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("✓ Loaded advisories for {count} countries").into());

    Ok(count)
}

#[wasm_bindgen]
pub fn is_catalog_loaded() -> bool {
    catalog().is_some()
}

/// Drop the session catalog; the page fetches the feed again on next use.
#[wasm_bindgen]
pub fn clear_catalog() {
    if let Ok(mut slot) = CATALOG.write() {
        *slot = None;
    }
}

#[wasm_bindgen]
pub fn advisory_by_code(code: &str) -> Result<JsValue, JsValue> {
    match catalog().as_deref().and_then(|c| c.advisory_by_code(code)) {
        Some(advisory) => to_value(advisory).map_err(JsValue::from),
        None => Ok(JsValue::NULL),
    }
}

/// Exact, case-sensitive name lookup.
#[wasm_bindgen]
pub fn advisory_by_name(name: &str) -> Result<JsValue, JsValue> {
    match catalog().as_deref().and_then(|c| c.advisory_by_name(name)) {
        Some(advisory) => to_value(advisory).map_err(JsValue::from),
        None => Ok(JsValue::NULL),
    }
}

/* --------------------------------------------------------------------------
   Dropdown & popup
-------------------------------------------------------------------------- */

/// Alphabetised `{code, name}` entries whose name or code contains `term`.
/// An empty term lists every country.
#[wasm_bindgen]
pub fn country_options(term: &str) -> Result<JsValue, JsValue> {
    let options = catalog().map(|c| c.options()).unwrap_or_default();
    to_value(&filter_options(&options, term)).map_err(JsValue::from)
}

/// Popup markup for a country, or `undefined` when it is not in the catalog.
#[wasm_bindgen]
pub fn popup_html(code: &str) -> Option<String> {
    let catalog = catalog()?;
    catalog
        .advisory_by_code(code)
        .map(|advisory| PopupContent::from_advisory(advisory).to_html())
}

/* --------------------------------------------------------------------------
   Zoom
-------------------------------------------------------------------------- */

/// Zoom level for a country code, or `undefined` to keep the current zoom.
#[wasm_bindgen]
pub fn classify_zoom(code: &str) -> Option<u8> {
    advisory_core::classify_zoom(code)
}

#[wasm_bindgen]
pub fn zoom_tier(code: &str) -> Option<String> {
    classify_tier(code).map(|tier| tier.label().to_string())
}

/* --------------------------------------------------------------------------
   Geocoder responses
-------------------------------------------------------------------------- */

/// `{lat, lng}` of the first forward-geocoding result, or `null`.
#[wasm_bindgen]
pub fn parse_forward_response(json: &str) -> Result<JsValue, JsValue> {
    match parse_forward(json).map_err(js_error)? {
        Some(at) => to_value(&at).map_err(JsValue::from),
        None => Ok(JsValue::NULL),
    }
}

/// Country label of the first reverse-geocoding result.
#[wasm_bindgen]
pub fn parse_reverse_response(json: &str) -> Result<Option<String>, JsValue> {
    parse_reverse(json).map_err(js_error)
}

/// Code of the selectable country whose name is exactly `label`.
#[wasm_bindgen]
pub fn resolve_click_label(label: &str) -> Option<String> {
    let options = catalog()?.options();
    resolve_label(label, &options).map(|option| option.code.clone())
}
