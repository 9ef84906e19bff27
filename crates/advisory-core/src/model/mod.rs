// crates/advisory-core/src/model/mod.rs
pub mod advisory;
pub mod convert;
pub mod raw;

pub use advisory::{AdvisoryCatalog, CountryAdvisory, CountryOption};
pub use raw::{AdvisoryRaw, AdvisoryResponseRaw, CountryRaw};
