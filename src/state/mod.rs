//! State module for tracking crawl progress
//!
//! This module provides the data shared between the crawl loop and anyone
//! observing it.
//!
//! # Components
//!
//! - `Record`: one URL's extraction result, five fixed fields
//! - `CrawlPhase`: where a crawl is in its lifecycle (idle, running, stopped, completed, failed)
//! - `CrawlState`: the mutable crawl bookkeeping that observers read as snapshots

mod crawl_state;
mod record;

// Re-export main types
pub use crawl_state::{CrawlPhase, CrawlState};
pub use record::{Record, CSV_HEADERS, SENTINEL};
