//! biz-scraper: business contact harvesting from a list of websites
//!
//! This crate fetches web pages one at a time, pulls a business name, email
//! address, Instagram profile and phone number out of each page with
//! prioritized pattern matching, and reports progress to whoever is watching
//! (a log, a live web UI, or nobody). Results are summarized and exported as
//! CSV.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod progress;
pub mod server;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for biz-scraper operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Scraping is already in progress")]
    Busy,

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Crawl task failed: {0}")]
    TaskFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while fetching a single page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("{status} for url: {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid address in config: {0}")]
    InvalidAddress(String),
}

/// Result type alias for biz-scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for page fetches
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlController, RecordBuilder};
pub use output::{export_csv, summarize, Summary};
pub use progress::{BroadcastSink, LogSink, NoopSink, ProgressEvent, ProgressSink};
pub use state::{CrawlState, Record, SENTINEL};
pub use url::normalize_url;
