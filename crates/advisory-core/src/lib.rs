// crates/advisory-core/src/lib.rs

//! # advisory-core
//!
//! Country travel advisories for map front ends.
//!
//! The crate owns the two pieces of real logic behind the advisory map page:
//!
//! - the **advisory catalog**: one fetch of the advisory feed, cached for the
//!   session and resolved by country code or by exact country name
//!   ([`AdvisoryCache`], [`AdvisoryCatalog`]);
//! - the **zoom classifier**: a fixed partition of country codes into seven
//!   size tiers, each with a map zoom level ([`classify_zoom`], [`ZoomTier`]).
//!
//! Everything the page draws (markers, popups, the dropdown) sits behind the
//! collaborator traits in [`traits`], and [`SelectionController`] wires the
//! dropdown and map-click flows through them.
//!
//! ```rust
//! use advisory_core::{classify_zoom, ZoomTier};
//!
//! assert_eq!(classify_zoom("FR"), Some(5));
//! assert_eq!(ZoomTier::of("us"), Some(ZoomTier::Xxl));
//! assert_eq!(classify_zoom("ZZ"), None);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog; // Session cache over a source
pub mod common;
pub mod config;
pub mod error;
pub mod geocode;
pub mod model;
pub mod popup;
pub mod selection;
pub mod source;
pub mod text;
pub mod traits;
pub mod zoom;

// Re-exports
pub use crate::catalog::{load_catalog, AdvisoryCache};
pub use crate::common::{CatalogStats, LatLng};
pub use crate::config::AdvisoryConfig;
pub use crate::error::{AdvisoryError, Result};
pub use crate::model::{AdvisoryCatalog, CountryAdvisory, CountryOption};
pub use crate::popup::PopupContent;
pub use crate::selection::{filter_options, resolve_label, SelectionController, SelectionOutcome};
pub use crate::traits::{AdvisorySource, Geocoder, MapDisplay, Notifier};
pub use crate::zoom::{classify_tier, classify_zoom, validate_tiers, ZoomTier};

#[cfg(feature = "http")]
pub use crate::geocode::OpenCageGeocoder;
#[cfg(feature = "http")]
pub use crate::source::HttpAdvisorySource;
#[cfg(feature = "fs")]
pub use crate::source::JsonFileSource;

pub mod prelude {
    //! Everything a front end needs in one import.
    pub use crate::{
        classify_tier, classify_zoom, filter_options, AdvisoryCache, AdvisoryCatalog,
        AdvisoryConfig, AdvisoryError, AdvisorySource, CountryAdvisory, CountryOption, Geocoder,
        LatLng, MapDisplay, Notifier, PopupContent, Result, SelectionController,
        SelectionOutcome, ZoomTier,
    };
}
