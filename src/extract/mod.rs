//! Field extraction engine
//!
//! Each extractor maps a parsed page and its normalized URL to one field
//! value. Extractors never fail: anything they cannot determine comes back
//! as the `"N/A"` sentinel.
//!
//! - Business name: title, then first heading, then the host name
//! - Email: text matches, then `mailto:` links
//! - Instagram: link targets, then page text
//! - Phone: five patterns in fixed priority order

mod document;
mod email;
mod name;
mod phone;
mod social;

pub use document::ParsedDocument;
pub use email::{collect_candidates, extract_email};
pub use name::{clean_title, extract_business_name};
pub use phone::extract_phone;
pub use social::extract_instagram;

use crate::state::Record;

/// Runs every extractor over a parsed page and assembles the record
///
/// # Example
///
/// ```
/// use biz_scraper::extract::{extract_record, ParsedDocument};
///
/// let doc = ParsedDocument::parse(
///     r#"<html><head><title>Acme Co - Home</title></head>
///        <body>Write to sales@acme.com</body></html>"#,
/// );
/// let record = extract_record(&doc, "https://acme.com");
/// assert_eq!(record.business_name, "Acme Co");
/// assert_eq!(record.email, "sales@acme.com");
/// assert_eq!(record.website, "https://acme.com");
/// ```
pub fn extract_record(doc: &ParsedDocument, url: &str) -> Record {
    Record {
        business_name: extract_business_name(doc, url),
        website: url.to_string(),
        email: extract_email(doc, url),
        instagram: extract_instagram(doc, url),
        phone: extract_phone(doc, url),
    }
}
