// Test doubles for the collaborator traits.
#![allow(dead_code)]

use advisory_core::{
    AdvisoryCatalog, AdvisoryError, AdvisorySource, Geocoder, LatLng, MapDisplay, Notifier,
    Result,
};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

pub const SAMPLE_FEED: &str = r#"{
  "data": {
    "FR": {"name": "France",
           "advisory": {"message": "Exercise normal precautions", "source": "https://x", "sources_active": 3}},
    "DE": {"name": "Germany",
           "advisory": {"message": "Exercise normal precautions", "source": "https://y", "sources_active": 4}},
    "US": {"name": "United States",
           "advisory": {"message": "Exercise normal precautions", "source": "https://z", "sources_active": 2}},
    "AQ": {"name": "Antarctica",
           "advisory": {"message": "No advisory sources", "source": "", "sources_active": 0}}
  }
}"#;

pub fn sample_catalog() -> AdvisoryCatalog {
    AdvisoryCatalog::from_json_str(SAMPLE_FEED).unwrap()
}

/// Serves a fixed catalog and counts how often it is asked.
#[derive(Default)]
pub struct CountingSource {
    pub calls: AtomicUsize,
    pub delay: Option<Duration>,
    pub gate: Option<Arc<Notify>>,
    pub fail: bool,
}

impl CountingSource {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AdvisorySource for CountingSource {
    async fn fetch_catalog(&self) -> Result<AdvisoryCatalog> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail {
            return Err(AdvisoryError::Fetch("connection refused".into()));
        }
        Ok(sample_catalog())
    }
}

/// Geocoder answering from fixed tables. A gated place name blocks until its
/// `Notify` fires.
#[derive(Default)]
pub struct FakeGeocoder {
    places: HashMap<String, LatLng>,
    labels: Vec<(LatLng, String)>,
    gates: HashMap<String, Arc<Notify>>,
    broken: HashSet<String>,
    pub fail: bool,
    pub forward_calls: AtomicUsize,
}

impl FakeGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(mut self, name: &str, at: LatLng) -> Self {
        self.places.insert(name.to_string(), at);
        self
    }

    pub fn label(mut self, at: LatLng, label: &str) -> Self {
        self.labels.push((at, label.to_string()));
        self
    }

    pub fn gate(mut self, name: &str, gate: Arc<Notify>) -> Self {
        self.gates.insert(name.to_string(), gate);
        self
    }

    /// Forward lookups for `name` fail; everything else answers normally.
    pub fn broken(mut self, name: &str) -> Self {
        self.broken.insert(name.to_string());
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn forward(&self, place: &str) -> Result<Option<LatLng>> {
        self.forward_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = self.gates.get(place) {
            gate.notified().await;
        }
        if self.fail || self.broken.contains(place) {
            return Err(AdvisoryError::Fetch("geocoder timed out".into()));
        }
        Ok(self.places.get(place).copied())
    }

    async fn reverse(&self, at: LatLng) -> Result<Option<String>> {
        if self.fail {
            return Err(AdvisoryError::Fetch("geocoder timed out".into()));
        }
        Ok(self
            .labels
            .iter()
            .find(|(point, _)| *point == at)
            .map(|(_, label)| label.clone()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    Marker { at: LatLng, popup_html: String },
    View { at: LatLng, zoom: u8 },
}

#[derive(Default)]
pub struct RecordingMap {
    pub calls: Mutex<Vec<MapCall>>,
}

impl RecordingMap {
    pub fn calls(&self) -> Vec<MapCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_popup(&self) -> Option<String> {
        self.calls().into_iter().rev().find_map(|call| match call {
            MapCall::Marker { popup_html, .. } => Some(popup_html),
            MapCall::View { .. } => None,
        })
    }
}

impl MapDisplay for RecordingMap {
    fn show_marker(&self, at: LatLng, popup_html: &str) {
        self.calls.lock().unwrap().push(MapCall::Marker {
            at,
            popup_html: popup_html.to_string(),
        });
    }

    fn set_view(&self, at: LatLng, zoom: u8) {
        self.calls.lock().unwrap().push(MapCall::View { at, zoom });
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notice(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}
