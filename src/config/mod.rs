//! Configuration module for biz-scraper
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. A config file is optional: every key has a default.
//!
//! # Example
//!
//! ```no_run
//! use biz_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Pausing {}ms between sites", config.scraper.delay_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, ScraperConfig, ServerConfig, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{
    apply_env_overrides, compute_config_hash, load_config, load_config_with_hash, parse_config,
};
