// crates/advisory-core/src/traits.rs

//! Seams to the outside world.
//!
//! The network feeds and the page widgets are collaborators behind these
//! traits. The crate ships HTTP and file implementations of the data traits;
//! the display traits are implemented by whatever draws the map (a wasm
//! page, the CLI's printer, or a test recorder).

use crate::common::LatLng;
use crate::error::Result;
use crate::model::AdvisoryCatalog;
use async_trait::async_trait;

/// Where the advisory catalog comes from.
#[async_trait]
pub trait AdvisorySource: Send + Sync {
    /// Fetch and parse one complete catalog.
    async fn fetch_catalog(&self) -> Result<AdvisoryCatalog>;
}

/// Place name ↔ coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Coordinates for a place name. `Ok(None)` when the service has no result.
    async fn forward(&self, place: &str) -> Result<Option<LatLng>>;

    /// Best-effort country label for a point. `Ok(None)` when the service has
    /// no result.
    async fn reverse(&self, at: LatLng) -> Result<Option<String>>;
}

/// The map widget.
pub trait MapDisplay: Send + Sync {
    /// Put a single marker with an open popup at `at`, replacing any marker
    /// already shown.
    fn show_marker(&self, at: LatLng, popup_html: &str);

    /// Recentre the map on `at` at the given zoom.
    fn set_view(&self, at: LatLng, zoom: u8);
}

/// Non-blocking notices to the user (toast, status line).
pub trait Notifier: Send + Sync {
    fn notice(&self, message: &str);
}

/// A notifier that only logs. Used when the front end has no notice area.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notice(&self, message: &str) {
        tracing::warn!(notice = message);
    }
}

#[async_trait]
impl<T: AdvisorySource + ?Sized> AdvisorySource for std::sync::Arc<T> {
    async fn fetch_catalog(&self) -> Result<AdvisoryCatalog> {
        (**self).fetch_catalog().await
    }
}

#[async_trait]
impl<T: AdvisorySource + ?Sized> AdvisorySource for Box<T> {
    async fn fetch_catalog(&self) -> Result<AdvisoryCatalog> {
        (**self).fetch_catalog().await
    }
}

#[async_trait]
impl<T: Geocoder + ?Sized> Geocoder for std::sync::Arc<T> {
    async fn forward(&self, place: &str) -> Result<Option<LatLng>> {
        (**self).forward(place).await
    }

    async fn reverse(&self, at: LatLng) -> Result<Option<String>> {
        (**self).reverse(at).await
    }
}

impl<T: MapDisplay + ?Sized> MapDisplay for std::sync::Arc<T> {
    fn show_marker(&self, at: LatLng, popup_html: &str) {
        (**self).show_marker(at, popup_html)
    }

    fn set_view(&self, at: LatLng, zoom: u8) {
        (**self).set_view(at, zoom)
    }
}

impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    fn notice(&self, message: &str) {
        (**self).notice(message)
    }
}
