// crates/advisory-core/src/model/convert.rs
use super::advisory::{AdvisoryCatalog, CountryAdvisory};
use super::raw::{AdvisoryResponseRaw, CountryRaw};
use crate::text::normalize_code;
use std::collections::BTreeMap;

/// Convert the raw feed into a catalog keyed by normalised country code.
///
/// The map key of `data` is authoritative; `iso_alpha2` inside the entry is
/// only informational and is not used for keying. When two keys normalise to
/// the same code (`"fr"` and `"FR"`), the key already in canonical form wins.
pub fn from_raw(raw: AdvisoryResponseRaw) -> AdvisoryCatalog {
    let mut entries: BTreeMap<String, (bool, CountryAdvisory)> = BTreeMap::new();
    for (key, country) in raw.data {
        let code = normalize_code(&key);
        if code.is_empty() {
            tracing::debug!(name = %country.name, "skipping advisory entry with empty code");
            continue;
        }
        if let Some(iso) = country.iso_alpha2.as_deref() {
            if !iso.eq_ignore_ascii_case(&code) {
                tracing::debug!(%code, %iso, "feed key and iso_alpha2 disagree, keeping key");
            }
        }

        let canonical = key == code;
        if let Some((kept_canonical, _)) = entries.get(&code) {
            tracing::warn!(%code, %key, "feed lists the same country code twice");
            if *kept_canonical || !canonical {
                continue;
            }
        }
        let advisory = to_advisory(code.clone(), country);
        entries.insert(code, (canonical, advisory));
    }

    AdvisoryCatalog::from_advisories(entries.into_values().map(|(_, advisory)| advisory))
}

fn to_advisory(code: String, c: CountryRaw) -> CountryAdvisory {
    CountryAdvisory {
        code,
        name: c.name,
        advisory_message: c.advisory.message,
        source_url: c.advisory.source,
        sources_active: c.advisory.sources_active,
        score: c.advisory.score,
        updated: c.advisory.updated,
        continent: c.continent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_by_normalised_map_key() {
        let raw: AdvisoryResponseRaw = serde_json::from_str(
            r#"{"data": {
                "fr": {"iso_alpha2": "FR", "name": "France", "continent": "EU",
                       "advisory": {"score": 2.3, "sources_active": 3,
                                    "message": "Exercise normal precautions",
                                    "updated": "2024-01-01 07:23:01",
                                    "source": "https://x"}},
                "":   {"name": "Nowhere", "advisory": {}}
            }}"#,
        )
        .unwrap();

        let catalog = from_raw(raw);
        assert_eq!(catalog.len(), 1);
        let fr = catalog.advisory_by_code("FR").unwrap();
        assert_eq!(fr.name, "France");
        assert_eq!(fr.sources_active, 3);
        assert_eq!(fr.score, Some(2.3));
        assert_eq!(fr.continent.as_deref(), Some("EU"));
    }

    #[test]
    fn canonical_key_wins_over_lowercase_duplicate() {
        for json in [
            r#"{"data": {"fr": {"name": "lower", "advisory": {}}, "FR": {"name": "upper", "advisory": {}}}}"#,
            r#"{"data": {"FR": {"name": "upper", "advisory": {}}, "fr": {"name": "lower", "advisory": {}}}}"#,
            r#"{"data": {" fr": {"name": "spaced", "advisory": {}}, "FR": {"name": "upper", "advisory": {}}}}"#,
        ] {
            let raw: AdvisoryResponseRaw = serde_json::from_str(json).unwrap();
            let catalog = from_raw(raw);
            assert_eq!(catalog.len(), 1);
            assert_eq!(catalog.advisory_by_code("FR").unwrap().name, "upper", "{json}");
        }
    }

    #[test]
    fn missing_advisory_fields_default() {
        let raw: AdvisoryResponseRaw =
            serde_json::from_str(r#"{"data": {"AQ": {"name": "Antarctica", "advisory": {}}}}"#)
                .unwrap();
        let aq = from_raw(raw).advisory_by_code("AQ").cloned().unwrap();
        assert_eq!(aq.advisory_message, "");
        assert_eq!(aq.sources_active, 0);
        assert_eq!(aq.score, None);
    }
}
