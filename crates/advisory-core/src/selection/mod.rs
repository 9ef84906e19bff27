// crates/advisory-core/src/selection/mod.rs

//! # Country selection
//!
//! A user picks a country in one of two ways:
//!
//! - **dropdown**: the entry carries the code directly;
//! - **map click**: the clicked point is reverse-geocoded to a label, and the
//!   label must equal (case-sensitive) the name of one of the country-select
//!   options. No match means nothing happens.
//!
//! [`SelectionController`] runs both flows against the shared catalog cache
//! and reports what happened as a [`SelectionOutcome`].

mod controller;

pub use controller::SelectionController;

use crate::common::LatLng;
use crate::model::CountryOption;
use crate::text::contains_folded;

/// Dropdown entries matching a search term.
///
/// The term is trimmed and matched case- and accent-insensitively as a
/// substring of the name or the code. An empty term keeps every option.
/// Order is preserved.
pub fn filter_options(options: &[CountryOption], term: &str) -> Vec<CountryOption> {
    let term = term.trim();
    if term.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|o| contains_folded(&o.name, term) || contains_folded(&o.code, term))
        .cloned()
        .collect()
}

/// The option whose name is exactly `label` (surrounding whitespace ignored).
pub fn resolve_label<'a>(label: &str, options: &'a [CountryOption]) -> Option<&'a CountryOption> {
    let label = label.trim();
    options.iter().find(|o| o.name == label)
}

/// Result of one selection, dropdown or map click.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// Marker and popup shown at `at`. The map was recentred only when `zoom`
    /// is `Some`.
    Displayed {
        country: CountryOption,
        at: LatLng,
        zoom: Option<u8>,
    },
    /// A newer selection was issued while this one was in flight; its result
    /// was dropped.
    Superseded { seq: u64 },
    /// Nothing to show.
    NoOp(NoOpReason),
    /// The advisory catalog could not be loaded. The user got a notice.
    CatalogUnavailable,
    /// The geocoding service failed. The user got a notice.
    GeocodeUnavailable,
}

impl SelectionOutcome {
    pub fn is_displayed(&self) -> bool {
        matches!(self, SelectionOutcome::Displayed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoOpReason {
    /// The code or name is not in the catalog.
    UnknownCountry(String),
    /// Forward geocoding returned no results for this name.
    NoCoordinates(String),
    /// Reverse geocoding returned no label for the clicked point.
    NoLabel,
    /// The label matched none of the country-select options.
    UnmatchedLabel(String),
}
