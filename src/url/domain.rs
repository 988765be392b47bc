use url::Url;

/// Top-level domain suffixes dropped when deriving a name from a host
const STRIPPED_SUFFIXES: &[&str] = &[".com", ".org", ".net"];

/// Extracts the lowercase host from a URL string
///
/// Returns None if the string does not parse or has no host.
///
/// # Examples
///
/// ```
/// use biz_scraper::url::extract_domain;
///
/// assert_eq!(extract_domain("https://Example.COM/path"), Some("example.com".to_string()));
/// assert_eq!(extract_domain("not a url"), None);
/// ```
pub fn extract_domain(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()?
        .host_str()
        .map(|h| h.to_lowercase())
}

/// Derives a display name from the host of a URL
///
/// Used as the last fallback for business names:
/// 1. Take the host (port excluded)
/// 2. Drop a leading `www.`
/// 3. Drop a trailing `.com`, `.org` or `.net`
/// 4. Title-case what is left
///
/// # Examples
///
/// ```
/// use biz_scraper::url::name_from_host;
///
/// assert_eq!(name_from_host("https://www.acme-bakery.com/"), Some("Acme-Bakery".to_string()));
/// ```
pub fn name_from_host(url: &str) -> Option<String> {
    let host = extract_domain(url)?;
    let mut name = host.strip_prefix("www.").unwrap_or(&host);

    for suffix in STRIPPED_SUFFIXES {
        if let Some(stripped) = name.strip_suffix(suffix) {
            name = stripped;
            break;
        }
    }

    if name.is_empty() {
        return None;
    }

    Some(title_case(name))
}

/// Uppercases the first letter of every run of letters and lowercases the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}
