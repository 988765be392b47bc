use crate::extract::ParsedDocument;
use crate::state::SENTINEL;
use crate::url::name_from_host;
use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing boilerplate such as " - Home" or " | Official Site"
static TITLE_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*[-|]\s*(Home|Welcome|Official Site|Website).*$")
        .expect("title suffix pattern is valid")
});

/// Extracts the business name of a page
///
/// Fallback chain, each step tried only when the previous one produced
/// nothing:
/// 1. The `<title>` text with trailing boilerplate removed
/// 2. The first `<h1>` text
/// 3. A name derived from the host of `url`
pub fn extract_business_name(doc: &ParsedDocument, url: &str) -> String {
    doc.title()
        .map(|title| clean_title(&title))
        .filter(|title| !title.is_empty())
        .or_else(|| doc.first_heading())
        .or_else(|| name_from_host(url))
        .unwrap_or_else(|| SENTINEL.to_string())
}

/// Strips the first separator-led boilerplate suffix and everything after it
pub fn clean_title(title: &str) -> String {
    TITLE_SUFFIX.replace(title, "").trim().to_string()
}
