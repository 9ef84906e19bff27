// crates/advisory-core/src/selection/controller.rs
use super::{resolve_label, NoOpReason, SelectionOutcome};
use crate::catalog::AdvisoryCache;
use crate::common::LatLng;
use crate::error::AdvisoryError;
use crate::model::{CountryAdvisory, CountryOption};
use crate::popup::PopupContent;
use crate::traits::{AdvisorySource, Geocoder, LogNotifier, MapDisplay, Notifier};
use crate::zoom::classify_zoom;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

const CATALOG_NOTICE: &str = "Travel advisories are unavailable right now. Please try again.";
const GEOCODE_NOTICE: &str = "The map service is unavailable right now. Please try again.";

/// Runs the dropdown and map-click flows.
///
/// Every call is tagged with a sequence number when it starts. Results reach
/// the map only if no newer call has started since, so a slow response for an
/// earlier selection can never overwrite a later one.
///
/// Countries without a zoom tier still get their marker and popup, but the
/// map keeps its current zoom.
pub struct SelectionController<S, G, M, N = LogNotifier> {
    cache: Arc<AdvisoryCache<S>>,
    geocoder: G,
    map: M,
    notifier: N,
    select_options: Option<Vec<CountryOption>>,
    latest: AtomicU64,
    selected: Mutex<Option<CountryOption>>,
}

impl<S, G, M> SelectionController<S, G, M, LogNotifier>
where
    S: AdvisorySource,
    G: Geocoder,
    M: MapDisplay,
{
    pub fn new(cache: Arc<AdvisoryCache<S>>, geocoder: G, map: M) -> Self {
        Self {
            cache,
            geocoder,
            map,
            notifier: LogNotifier,
            select_options: None,
            latest: AtomicU64::new(0),
            selected: Mutex::new(None),
        }
    }
}

impl<S, G, M, N> SelectionController<S, G, M, N>
where
    S: AdvisorySource,
    G: Geocoder,
    M: MapDisplay,
    N: Notifier,
{
    pub fn with_notifier<N2: Notifier>(self, notifier: N2) -> SelectionController<S, G, M, N2> {
        SelectionController {
            cache: self.cache,
            geocoder: self.geocoder,
            map: self.map,
            notifier,
            select_options: self.select_options,
            latest: self.latest,
            selected: self.selected,
        }
    }

    /// Options of the country-select control that map clicks are matched
    /// against. Without this, the catalog's own options are used.
    pub fn with_select_options(mut self, options: Vec<CountryOption>) -> Self {
        self.select_options = Some(options);
        self
    }

    pub fn cache(&self) -> &Arc<AdvisoryCache<S>> {
        &self.cache
    }

    /// The country currently shown on the map, if any.
    pub async fn selected(&self) -> Option<CountryOption> {
        self.selected.lock().await.clone()
    }

    /// Sequence number of the most recently started selection.
    pub fn latest_seq(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Dropdown flow: the user picked `code`.
    ///
    /// Loads the catalog, composes the popup, geocodes the country name, then
    /// shows the marker and recentres the map.
    pub async fn select_code(&self, code: &str) -> SelectionOutcome {
        let seq = self.begin();
        tracing::debug!(seq, code, "dropdown selection");

        let catalog = match self.cache.catalog().await {
            Ok(catalog) => catalog,
            Err(err) => return self.catalog_failed(seq, err),
        };
        let Some(advisory) = catalog.advisory_by_code(code).cloned() else {
            return self.no_op(seq, NoOpReason::UnknownCountry(code.to_string()));
        };
        let popup = PopupContent::from_advisory(&advisory).to_html();

        let at = match self.geocoder.forward(&advisory.name).await {
            Ok(Some(at)) => at,
            Ok(None) => return self.no_op(seq, NoOpReason::NoCoordinates(advisory.name)),
            Err(err) => return self.geocode_failed(seq, err),
        };

        self.apply(seq, &advisory, at, &popup).await
    }

    /// Map-click flow: the user clicked `at`.
    ///
    /// Reverse-geocodes the point, matches the label against the
    /// country-select options, and looks the advisory up by name.
    pub async fn select_at(&self, at: LatLng) -> SelectionOutcome {
        let seq = self.begin();
        tracing::debug!(seq, %at, "map click");

        let label = match self.geocoder.reverse(at).await {
            Ok(Some(label)) => label,
            Ok(None) => return self.no_op(seq, NoOpReason::NoLabel),
            Err(err) => return self.geocode_failed(seq, err),
        };

        let catalog = match self.cache.catalog().await {
            Ok(catalog) => catalog,
            Err(err) => return self.catalog_failed(seq, err),
        };

        let catalog_options;
        let options = match &self.select_options {
            Some(options) => options.as_slice(),
            None => {
                catalog_options = catalog.options();
                catalog_options.as_slice()
            }
        };
        let Some(option) = resolve_label(&label, options) else {
            return self.no_op(seq, NoOpReason::UnmatchedLabel(label));
        };
        let Some(advisory) = catalog.advisory_by_name(&option.name).cloned() else {
            return self.no_op(seq, NoOpReason::UnknownCountry(option.name.clone()));
        };
        let popup = PopupContent::from_advisory(&advisory).to_html();

        self.apply(seq, &advisory, at, &popup).await
    }

    fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, seq: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == seq
    }

    async fn apply(
        &self,
        seq: u64,
        advisory: &CountryAdvisory,
        at: LatLng,
        popup_html: &str,
    ) -> SelectionOutcome {
        // Check and draw under one lock so two finishing calls cannot interleave.
        let mut selected = self.selected.lock().await;
        if !self.is_latest(seq) {
            return self.superseded(seq);
        }

        let zoom = classify_zoom(&advisory.code);
        self.map.show_marker(at, popup_html);
        match zoom {
            Some(zoom) => self.map.set_view(at, zoom),
            None => tracing::debug!(code = %advisory.code, "no zoom tier, keeping current zoom"),
        }

        let country = advisory.option();
        *selected = Some(country.clone());
        tracing::info!(seq, code = %country.code, %at, ?zoom, "advisory displayed");
        SelectionOutcome::Displayed { country, at, zoom }
    }

    fn superseded(&self, seq: u64) -> SelectionOutcome {
        tracing::debug!(seq, latest = self.latest_seq(), "discarding stale selection result");
        SelectionOutcome::Superseded { seq }
    }

    fn no_op(&self, seq: u64, reason: NoOpReason) -> SelectionOutcome {
        if !self.is_latest(seq) {
            return self.superseded(seq);
        }
        tracing::debug!(seq, ?reason, "nothing to display");
        SelectionOutcome::NoOp(reason)
    }

    fn catalog_failed(&self, seq: u64, err: AdvisoryError) -> SelectionOutcome {
        tracing::warn!(seq, error = %err, "advisory catalog unavailable");
        if !self.is_latest(seq) {
            return self.superseded(seq);
        }
        self.notifier.notice(CATALOG_NOTICE);
        SelectionOutcome::CatalogUnavailable
    }

    fn geocode_failed(&self, seq: u64, err: AdvisoryError) -> SelectionOutcome {
        tracing::warn!(seq, error = %err, "geocoding failed");
        if !self.is_latest(seq) {
            return self.superseded(seq);
        }
        self.notifier.notice(GEOCODE_NOTICE);
        SelectionOutcome::GeocodeUnavailable
    }
}
