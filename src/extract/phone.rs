use crate::extract::ParsedDocument;
use crate::state::SENTINEL;
use once_cell::sync::Lazy;
use regex::Regex;

/// Phone patterns in priority order
///
/// Several of these overlap. The first pattern with any match in the page
/// decides the result, even when a later one would match a "better"
/// number.
const PHONE_PATTERNS: [&str; 5] = [
    // US, optional +1 and parenthesized area code
    r"\+?1?\s*\(?[0-9]{3}\)?[\s.-]?[0-9]{3}[\s.-]?[0-9]{4}",
    // International, up to four groups of 1-4 digits
    r"\+?[0-9]{1,4}[\s.-]?[0-9]{1,4}[\s.-]?[0-9]{1,4}[\s.-]?[0-9]{1,4}",
    // (123) 456-7890
    r"\([0-9]{3}\)\s*[0-9]{3}-[0-9]{4}",
    // 123-456-7890
    r"[0-9]{3}-[0-9]{3}-[0-9]{4}",
    // 123 456 7890
    r"[0-9]{3}\s[0-9]{3}\s[0-9]{4}",
];

static PHONES: Lazy<Vec<Regex>> = Lazy::new(|| {
    PHONE_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("phone pattern is valid"))
        .collect()
});

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Extracts the first phone number of a page
///
/// Returns the first match of the highest-priority pattern that matches
/// anywhere in the page text, trimmed and with whitespace runs collapsed to
/// single spaces.
pub fn extract_phone(doc: &ParsedDocument, _url: &str) -> String {
    let text = doc.text();

    PHONES
        .iter()
        .find_map(|pattern| pattern.find(&text))
        .map(|m| WHITESPACE.replace_all(m.as_str().trim(), " ").into_owned())
        .unwrap_or_else(|| SENTINEL.to_string())
}
