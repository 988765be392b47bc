/// Scheme prepended to input that carries none
const DEFAULT_SCHEME: &str = "https://";

/// Returns true if the raw input already starts with an HTTP(S) scheme
///
/// The check is literal and case-sensitive: `HTTP://example.com` does not
/// count as carrying a scheme.
pub fn has_scheme(raw: &str) -> bool {
    raw.starts_with("http://") || raw.starts_with("https://")
}

/// Normalizes raw user input into a URL string with an explicit scheme
///
/// Input without `http://` or `https://` gets `https://` prepended. Input
/// that already has one is returned unchanged. No other rewriting happens:
/// the result may still be unparseable, in which case the fetch fails and
/// the record is filled with sentinels.
///
/// # Examples
///
/// ```
/// use biz_scraper::url::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "https://example.com");
/// assert_eq!(normalize_url("http://example.com"), "http://example.com");
/// ```
pub fn normalize_url(raw: &str) -> String {
    if has_scheme(raw) {
        raw.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, raw)
    }
}

/// Splits newline-separated input into trimmed, non-blank entries
///
/// # Examples
///
/// ```
/// use biz_scraper::url::split_url_list;
///
/// assert_eq!(split_url_list(" a.com\n\n b.org \r\n"), vec!["a.com", "b.org"]);
/// ```
pub fn split_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
