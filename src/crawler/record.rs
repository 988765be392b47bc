//! Record builder: one URL in, one record out

use crate::crawler::fetch_page;
use crate::extract::{extract_record, ParsedDocument};
use crate::progress::{MessageKind, ProgressEvent, ProgressSink};
use crate::state::Record;
use crate::url::normalize_url;
use reqwest::Client;

/// Result of scraping one URL
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeOutcome {
    /// The record, fully sentinel when the fetch failed
    pub record: Record,

    /// Failure detail when the page could not be fetched
    pub error: Option<String>,
}

/// Combines the fetcher and the extractors
///
/// Fetch failures never escape: they become a record whose only known field
/// is the website, plus an error notification.
#[derive(Debug, Clone)]
pub struct RecordBuilder<S> {
    client: Client,
    sink: S,
}

impl<S: ProgressSink> RecordBuilder<S> {
    /// Creates a builder that fetches with `client` and reports to `sink`
    pub fn new(client: Client, sink: S) -> Self {
        Self { client, sink }
    }

    /// Scrapes one URL into a record
    ///
    /// Emits a "Scraping" message before the fetch and a "Found" or
    /// "Error loading" message after it.
    pub async fn scrape(&self, raw_url: &str) -> ScrapeOutcome {
        self.sink.notify(ProgressEvent::message(
            MessageKind::Scraping,
            format!("Scraping: {}", raw_url),
        ));

        let url = normalize_url(raw_url);

        match fetch_page(&self.client, &url).await {
            Ok(body) => {
                let record = build_record(&body, &url);
                tracing::debug!(
                    "Extracted from {}: name={}, email={}, instagram={}, phone={}",
                    url,
                    record.business_name,
                    record.email,
                    record.instagram,
                    record.phone
                );

                self.sink.notify(ProgressEvent::message(
                    MessageKind::Success,
                    format!("Found: {}", record.business_name),
                ));

                ScrapeOutcome {
                    record,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!("Failed to fetch {}: {}", url, e);

                self.sink.notify(ProgressEvent::message(
                    MessageKind::Error,
                    format!("Error loading {}: {}", url, e),
                ));

                ScrapeOutcome {
                    record: Record::unavailable(url),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

/// Parses a body and runs every extractor
///
/// Kept synchronous so the parsed tree, which is not `Send`, never lives
/// across an await point.
fn build_record(body: &str, url: &str) -> Record {
    let doc = ParsedDocument::parse(body);
    extract_record(&doc, url)
}
