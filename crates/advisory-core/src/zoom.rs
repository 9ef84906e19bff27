// crates/advisory-core/src/zoom.rs

//! # Zoom tiers
//!
//! Every country the map knows about sits in exactly one of seven size
//! tiers. The tier decides how far the map zooms in when the country is
//! selected: city-states get zoom 11, continent-sized countries zoom 3.
//!
//! The code lists are static and folded once into a single `code → tier`
//! index, so classification is a hash lookup. A code in none of the lists is
//! *unclassified* (`None`); callers decide what that means for the map.

use crate::error::{AdvisoryError, Result};
use crate::text::normalize_code;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Country size tier, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomTier {
    Xxs,
    Xs,
    Sm,
    Med,
    Lg,
    Xl,
    Xxl,
}

impl ZoomTier {
    /// All tiers in classification priority order.
    pub const ALL: [ZoomTier; 7] = [
        ZoomTier::Xxs,
        ZoomTier::Xs,
        ZoomTier::Sm,
        ZoomTier::Med,
        ZoomTier::Lg,
        ZoomTier::Xl,
        ZoomTier::Xxl,
    ];

    /// Map zoom level for countries of this tier.
    pub const fn zoom(self) -> u8 {
        match self {
            ZoomTier::Xxs => 11,
            ZoomTier::Xs => 9,
            ZoomTier::Sm => 7,
            ZoomTier::Med => 6,
            ZoomTier::Lg => 5,
            ZoomTier::Xl => 4,
            ZoomTier::Xxl => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ZoomTier::Xxs => "xxs",
            ZoomTier::Xs => "xs",
            ZoomTier::Sm => "sm",
            ZoomTier::Med => "med",
            ZoomTier::Lg => "lg",
            ZoomTier::Xl => "xl",
            ZoomTier::Xxl => "xxl",
        }
    }

    /// The static code list of this tier.
    pub fn codes(self) -> &'static [&'static str] {
        match self {
            ZoomTier::Xxs => XXS_CODES,
            ZoomTier::Xs => XS_CODES,
            ZoomTier::Sm => SM_CODES,
            ZoomTier::Med => MED_CODES,
            ZoomTier::Lg => LG_CODES,
            ZoomTier::Xl => XL_CODES,
            ZoomTier::Xxl => XXL_CODES,
        }
    }

    /// Alias for [`classify_tier`].
    pub fn of(code: &str) -> Option<ZoomTier> {
        classify_tier(code)
    }
}

impl fmt::Display for ZoomTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// -----------------------------------------------------------------------------
// STATIC DATA
// -----------------------------------------------------------------------------

const XXS_CODES: &[&str] = &[
    "VA", "TV", "SG", "SC", "SM", "PM", "MF", "KN", "SH", "BL", "PN", "PW",
    "NF", "NU", "MS", "MC", "MO", "AI", "AW", "BB", "BM", "CX", "GI", "HK",
    "JE", "LI", "YT",
];

const XS_CODES: &[&str] = &[
    "KY", "VI", "TC", "WS", "VC", "LC", "RE", "PR", "MU", "MQ", "MT", "AD",
    "AG", "BH", "VG", "BN", "BI", "CC", "KM", "CK", "DM", "GP", "GU", "GG",
    "IM", "JM", "LU",
];

const SM_CODES: &[&str] = &[
    "KW", "XK", "GM", "GQ", "SV", "TL", "WF", "AE", "UG", "TT", "TO", "TW",
    "CH", "SZ", "SR", "LK", "GS", "SI", "SK", "SL", "SN", "ST", "RW", "QA",
    "PA", "PS", "MP", "NI", "NC", "NL", "NP", "ME", "MD", "MK", "LT", "LR",
    "LS", "LB", "LV", "KG", "KI", "JO", "IL", "IE", "HU", "HN", "HT", "GW",
    "GT", "GD", "GE", "GA", "PF", "GF", "FJ", "FO", "FK", "EE", "ER", "DO",
    "DJ", "DK", "CZ", "AL", "AS", "AM", "AT", "AZ", "BD", "BE", "BZ", "BA",
    "BF", "KH", "CV", "CR", "HR", "CU", "CY",
];

const MED_CODES: &[&str] = &[
    "ZW", "ZM", "YE", "EH", "VU", "UY", "TN", "TG", "TJ", "SY", "ES", "SS",
    "KR", "SB", "RO", "CG", "PT", "PL", "PY", "PG", "OM", "KP", "NG", "MV",
    "MW", "LA", "KE", "IS", "GY", "GN", "GR", "GH", "BY", "BJ", "BT", "BW",
    "BG", "CM", "CF", "EC", "IQ", "IT", "CI",
];

const LG_CODES: &[&str] = &[
    "VN", "VE", "UZ", "GB", "UA", "TM", "TR", "TH", "TZ", "SJ", "SD", "ZA",
    "SO", "RS", "SA", "PH", "PE", "PK", "NO", "NE", "NZ", "NA", "MM", "MZ",
    "MA", "MN", "FM", "MX", "MR", "MH", "ML", "MY", "MG", "LY", "KZ", "JP",
    "DE", "FR", "FI", "ET", "AF", "DZ", "AO", "BS", "BO", "TD", "CO", "CD",
    "EG", "IN", "ID", "IR",
];

const XL_CODES: &[&str] = &[
    "AR", "AU", "BR", "CL", "CN", "SE",
];

const XXL_CODES: &[&str] = &[
    "CA", "GL", "RU", "US",
];

// -----------------------------------------------------------------------------
// INDEX
// -----------------------------------------------------------------------------

static TIER_INDEX: Lazy<HashMap<&'static str, ZoomTier>> = Lazy::new(|| {
    let tables: Vec<_> = ZoomTier::ALL.iter().map(|t| (*t, t.codes())).collect();
    for (code, first, second) in find_overlaps(&tables) {
        tracing::warn!(%code, %first, %second, "country code listed in two zoom tiers, keeping the first");
    }
    build_index(&tables)
});

fn build_index(tables: &[(ZoomTier, &[&'static str])]) -> HashMap<&'static str, ZoomTier> {
    let mut index = HashMap::with_capacity(tables.iter().map(|(_, c)| c.len()).sum());
    for (tier, codes) in tables {
        for code in codes.iter() {
            // Priority order: an earlier tier keeps the code.
            index.entry(*code).or_insert(*tier);
        }
    }
    index
}

/// Every code that appears in more than one table, with the first two tiers
/// it appears in.
fn find_overlaps(tables: &[(ZoomTier, &[&str])]) -> Vec<(String, ZoomTier, ZoomTier)> {
    let mut first_seen: HashMap<&str, ZoomTier> = HashMap::new();
    let mut overlaps = Vec::new();
    for (tier, codes) in tables {
        for code in codes.iter() {
            match first_seen.get(code) {
                Some(first) if first != tier => overlaps.push((code.to_string(), *first, *tier)),
                Some(_) => {}
                None => {
                    first_seen.insert(*code, *tier);
                }
            }
        }
    }
    overlaps
}

/// Find the size tier of a country code (`"fr"` and `"FR"` are the same).
///
/// Returns `None` when the code is in no tier.
pub fn classify_tier(code: &str) -> Option<ZoomTier> {
    let tier = TIER_INDEX.get(normalize_code(code).as_str()).copied();
    match tier {
        Some(t) => tracing::debug!(code, tier = %t, zoom = t.zoom(), "classified"),
        None => tracing::debug!(code, "no zoom tier for country code"),
    }
    tier
}

/// Map zoom level for a country code, or `None` when it is unclassified.
///
/// No default zoom is substituted; see [`SelectionController`](crate::SelectionController)
/// for what the map does with an unclassified country.
pub fn classify_zoom(code: &str) -> Option<u8> {
    classify_tier(code).map(ZoomTier::zoom)
}

/// Check that the seven tier lists are pairwise disjoint.
pub fn validate_tiers() -> Result<()> {
    let tables: Vec<_> = ZoomTier::ALL.iter().map(|t| (*t, t.codes())).collect();
    let overlaps = find_overlaps(&tables);
    if overlaps.is_empty() {
        return Ok(());
    }
    let listed = overlaps
        .iter()
        .map(|(code, a, b)| format!("{code} ({a}, {b})"))
        .collect::<Vec<_>>()
        .join(", ");
    Err(AdvisoryError::InvalidData(format!(
        "country codes in more than one zoom tier: {listed}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tier_lists_are_pairwise_disjoint() {
        validate_tiers().unwrap();
        for (i, a) in ZoomTier::ALL.iter().enumerate() {
            let a_codes: HashSet<_> = a.codes().iter().collect();
            for b in &ZoomTier::ALL[i + 1..] {
                let shared: Vec<_> = b.codes().iter().filter(|c| a_codes.contains(c)).collect();
                assert!(shared.is_empty(), "{a} and {b} share {shared:?}");
            }
        }
    }

    #[test]
    fn every_listed_code_classifies_to_its_tier() {
        for tier in ZoomTier::ALL {
            for code in tier.codes() {
                assert_eq!(classify_tier(code), Some(tier), "{code}");
                assert_eq!(classify_zoom(code), Some(tier.zoom()), "{code}");
            }
        }
    }

    #[test]
    fn unknown_codes_are_unclassified() {
        for code in ["ZZ", "AQ", "", "FRA", "??"] {
            assert_eq!(classify_zoom(code), None, "{code}");
        }
    }

    #[test]
    fn classification_ignores_case_and_whitespace() {
        assert_eq!(classify_zoom(" us"), Some(3));
        assert_eq!(classify_tier("va"), Some(ZoomTier::Xxs));
    }

    #[test]
    fn zoom_levels_shrink_with_tier_size() {
        let zooms: Vec<u8> = ZoomTier::ALL.iter().map(|t| t.zoom()).collect();
        assert_eq!(zooms, [11, 9, 7, 6, 5, 4, 3]);
    }

    #[test]
    fn overlaps_are_reported_and_first_tier_wins() {
        const SMALL: &[&str] = &["SZ", "LU"];
        const LARGE: &[&str] = &["SZ", "SE"];
        let tables = [(ZoomTier::Sm, SMALL), (ZoomTier::Xl, LARGE)];

        let overlaps = find_overlaps(&tables);
        assert_eq!(overlaps, vec![("SZ".to_string(), ZoomTier::Sm, ZoomTier::Xl)]);

        let index = build_index(&tables);
        assert_eq!(index.get("SZ"), Some(&ZoomTier::Sm));
        assert_eq!(index.get("SE"), Some(&ZoomTier::Xl));
    }
}
