// crates/advisory-core/src/model/advisory.rs
use crate::common::CatalogStats;
use crate::error::Result;
use crate::text::{fold_key, normalize_code};
use crate::zoom::classify_tier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The travel advisory for one country. Identity is `code`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryAdvisory {
    /// ISO-3166 alpha-2 code, uppercase.
    pub code: String,
    pub name: String,
    pub advisory_message: String,
    pub source_url: String,
    pub sources_active: u32,

    pub score: Option<f64>,
    pub updated: Option<String>,
    pub continent: Option<String>,
}

impl CountryAdvisory {
    /// The `{code, name}` pair shown in the selection controls.
    pub fn option(&self) -> CountryOption {
        CountryOption {
            code: self.code.clone(),
            name: self.name.clone(),
        }
    }
}

/// A `{code, name}` entry of the country dropdown or country-select control.
///
/// Also the transient "selected country" value: a new selection replaces it
/// wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryOption {
    pub code: String,
    pub name: String,
}

impl CountryOption {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// All advisories from one fetch of the feed.
///
/// Once built, a catalog is complete: a lookup miss means the country is not
/// in the feed, not that the data is stale. There is no partial update; the
/// cache replaces whole catalogs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryCatalog {
    entries: BTreeMap<String, CountryAdvisory>,
}

impl AdvisoryCatalog {
    /// Build a catalog from records. A later record with the same code wins.
    pub fn from_advisories(advisories: impl IntoIterator<Item = CountryAdvisory>) -> Self {
        let entries = advisories
            .into_iter()
            .map(|a| (a.code.clone(), a))
            .collect();
        Self { entries }
    }

    /// Parse the feed document (`{"data": {...}}`).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw = serde_json::from_str(json)?;
        Ok(super::convert::from_raw(raw))
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let raw = serde_json::from_slice(bytes)?;
        Ok(super::convert::from_raw(raw))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a country by code. Codes are matched after trimming and
    /// uppercasing, so `" fr"` finds `FR`.
    pub fn advisory_by_code(&self, code: &str) -> Option<&CountryAdvisory> {
        self.entries.get(&normalize_code(code))
    }

    /// Look up a country by its exact name as sourced.
    ///
    /// Case-sensitive and accent-sensitive: `"france"` does not find
    /// `"France"`. Entries are scanned in code order and the first match wins.
    pub fn advisory_by_name(&self, name: &str) -> Option<&CountryAdvisory> {
        self.entries.values().find(|a| a.name == name)
    }

    /// Dropdown entries, alphabetised by name.
    pub fn options(&self) -> Vec<CountryOption> {
        let mut options: Vec<CountryOption> = self.entries.values().map(|a| a.option()).collect();
        options.sort_by_cached_key(|o| (fold_key(&o.name), o.name.clone(), o.code.clone()));
        options
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            countries: self.entries.len(),
            with_sources: self.entries.values().filter(|a| a.sources_active > 0).count(),
            unclassified: self
                .entries
                .keys()
                .filter(|code| classify_tier(code).is_none())
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advisory(code: &str, name: &str) -> CountryAdvisory {
        CountryAdvisory {
            code: code.into(),
            name: name.into(),
            advisory_message: format!("{name} advisory"),
            source_url: format!("https://example.org/{code}"),
            sources_active: 1,
            score: None,
            updated: None,
            continent: None,
        }
    }

    fn catalog() -> AdvisoryCatalog {
        AdvisoryCatalog::from_advisories([
            advisory("FR", "France"),
            advisory("AX", "Åland Islands"),
            advisory("DE", "Germany"),
            advisory("AF", "Afghanistan"),
        ])
    }

    #[test]
    fn lookup_by_code_normalises_input() {
        let c = catalog();
        assert_eq!(c.advisory_by_code("fr").map(|a| a.name.as_str()), Some("France"));
        assert_eq!(c.advisory_by_code(" DE ").map(|a| a.name.as_str()), Some("Germany"));
        assert!(c.advisory_by_code("ZZ").is_none());
    }

    #[test]
    fn lookup_by_code_is_idempotent() {
        let c = catalog();
        assert_eq!(c.advisory_by_code("FR"), c.advisory_by_code("FR"));
    }

    #[test]
    fn lookup_by_name_is_case_exact() {
        let c = catalog();
        assert_eq!(c.advisory_by_name("Germany").map(|a| a.code.as_str()), Some("DE"));
        assert!(c.advisory_by_name("germany").is_none());
        assert!(c.advisory_by_name("Aland Islands").is_none());
    }

    #[test]
    fn options_sort_by_folded_name() {
        let names: Vec<_> = catalog().options().into_iter().map(|o| o.name).collect();
        assert_eq!(names, ["Afghanistan", "Åland Islands", "France", "Germany"]);
    }

    #[test]
    fn stats_count_unclassified_codes() {
        let mut records = vec![advisory("FR", "France"), advisory("AQ", "Antarctica")];
        records[1].sources_active = 0;
        let stats = AdvisoryCatalog::from_advisories(records).stats();
        assert_eq!(
            stats,
            CatalogStats {
                countries: 2,
                with_sources: 1,
                unclassified: 1
            }
        );
    }
}
