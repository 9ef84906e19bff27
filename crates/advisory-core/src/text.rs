// crates/advisory-core/src/text.rs

/// Convert a string into a folded key suitable for search and sorting.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use advisory_core::text::fold_key;
///
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// assert_eq!(fold_key("ÅLAND"), "aland");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Accent-insensitive and case-insensitive substring match.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_key(haystack).contains(&fold_key(needle))
}

/// Normalise a country code as typed or sourced: trimmed, ASCII uppercase.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
