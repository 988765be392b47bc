use crate::extract::ParsedDocument;
use crate::state::SENTINEL;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern is valid")
});

const MAILTO: &str = "mailto:";

/// Extracts the first plausible email address of a page
///
/// Candidates are collected in two passes and tried in collection order:
/// 1. Every pattern match in the page text
/// 2. The address part of every `mailto:` link not already collected
///
/// The first candidate with a `.` in its domain part wins.
pub fn extract_email(doc: &ParsedDocument, _url: &str) -> String {
    let candidates = collect_candidates(doc);

    candidates
        .into_iter()
        .find(|email| is_plausible(email))
        .unwrap_or_else(|| SENTINEL.to_string())
}

/// Collects email candidates, text matches first, then mailto targets
pub fn collect_candidates(doc: &ParsedDocument) -> Vec<String> {
    let text = doc.text();
    let mut emails: Vec<String> = EMAIL
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect();

    for href in doc.links() {
        if !href.starts_with(MAILTO) {
            continue;
        }

        let address = href.replace(MAILTO, "");
        let address = address.split('?').next().unwrap_or_default().to_string();

        if !emails.contains(&address) {
            emails.push(address);
        }
    }

    emails
}

/// Checks for an `@` followed by a domain part that contains a dot
fn is_plausible(email: &str) -> bool {
    email
        .split('@')
        .nth(1)
        .is_some_and(|domain| domain.contains('.'))
}
