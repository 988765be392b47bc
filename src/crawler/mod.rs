//! Crawler module for fetching pages and turning them into records
//!
//! This module contains the crawl pipeline:
//! - HTTP fetching with a fixed timeout and no retries
//! - Building one record per URL, failures included
//! - Sequential crawl control with pacing and cooperative cancellation

mod controller;
mod fetcher;
mod record;

pub use controller::CrawlController;
pub use fetcher::{build_http_client, fetch_page};
pub use record::{RecordBuilder, ScrapeOutcome};

use crate::config::Config;
use crate::progress::LogSink;
use crate::state::CrawlState;
use crate::ScrapeError;

/// Runs a complete crawl in batch mode
///
/// This is the entry point for non-interactive use. It will:
/// 1. Build the HTTP client from the configuration
/// 2. Fetch and extract every URL in order, logging progress
/// 3. Export the results to the configured CSV path
///
/// # Arguments
///
/// * `config` - The scraper configuration
/// * `urls` - Raw URLs in crawl order; blank entries are skipped
///
/// # Returns
///
/// * `Ok(CrawlState)` - The final crawl state, records included
/// * `Err(ScrapeError)` - The crawl could not start
pub async fn crawl(config: &Config, urls: Vec<String>) -> Result<CrawlState, ScrapeError> {
    let controller = CrawlController::new(config, LogSink)?;
    controller.run(urls).await
}
