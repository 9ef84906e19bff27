//! travel-advisory-map
//!
//! Umbrella crate for the workspace. It re-exports [`advisory_core`] so the
//! demos can `use travel_advisory_map::prelude::*`.
pub use advisory_core::*;
