//! Output module for crawl results
//!
//! This module handles:
//! - Summarizing how many records carry each field
//! - Exporting records to CSV
//! - Printing the batch-mode console report

mod csv_export;
mod summary;

pub use csv_export::{export_csv, read_csv, write_csv};
pub use summary::{print_summary, summarize, Summary};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
