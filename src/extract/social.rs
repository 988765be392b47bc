use crate::extract::ParsedDocument;
use crate::state::SENTINEL;
use once_cell::sync::Lazy;
use regex::Regex;

static INSTAGRAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:www\.)?instagram\.com/[A-Za-z0-9._]+/?")
        .expect("instagram pattern is valid")
});

/// Extracts the Instagram profile URL of a page
///
/// Link targets are searched first, in document order; the page text is
/// only searched when no link matches. The matched portion of the URL is
/// returned, so query strings and deeper paths are dropped.
pub fn extract_instagram(doc: &ParsedDocument, _url: &str) -> String {
    doc.links()
        .iter()
        .find_map(|href| find_profile(href))
        .or_else(|| find_profile(&doc.text()))
        .unwrap_or_else(|| SENTINEL.to_string())
}

fn find_profile(haystack: &str) -> Option<String> {
    INSTAGRAM.find(haystack).map(|m| m.as_str().to_string())
}
