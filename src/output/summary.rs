//! Summary counts over a batch of records

use crate::state::{Record, SENTINEL};
use serde::Serialize;

/// How many records carry each extracted field
///
/// Derived from a batch of records on demand; never stored on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub business_names: usize,
    pub emails: usize,
    pub instagram: usize,
    pub phones: usize,
}

/// Counts the non-sentinel values of each extracted field
///
/// # Example
///
/// ```
/// use biz_scraper::output::summarize;
/// use biz_scraper::state::Record;
///
/// let records = vec![Record::unavailable("https://example.com")];
/// let summary = summarize(&records);
/// assert_eq!(summary.emails, 0);
/// ```
pub fn summarize(records: &[Record]) -> Summary {
    let count = |field: fn(&Record) -> bool| records.iter().filter(|&r| field(r)).count();

    Summary {
        business_names: count(Record::has_business_name),
        emails: count(Record::has_email),
        instagram: count(Record::has_instagram),
        phones: count(Record::has_phone),
    }
}

/// Number of records shown in the preview table
const PREVIEW_ROWS: usize = 5;

/// Prints the summary and a preview of the first records to stdout
pub fn print_summary(records: &[Record], summary: &Summary) {
    println!("=== Scrape Summary ===\n");

    println!("Total records: {}", records.len());
    println!(
        "  Websites with business names: {}",
        summary.business_names
    );
    println!("  Websites with emails: {}", summary.emails);
    println!("  Websites with Instagram: {}", summary.instagram);
    println!("  Websites with phone numbers: {}", summary.phones);
    println!();

    if records.is_empty() {
        return;
    }

    println!("First few results:");
    for record in records.iter().take(PREVIEW_ROWS) {
        println!("  - {} ({})", record.business_name, record.website);
        for (label, value) in [
            ("Email", &record.email),
            ("Instagram", &record.instagram),
            ("Phone", &record.phone),
        ] {
            if value != SENTINEL {
                println!("      {}: {}", label, value);
            }
        }
    }
}
