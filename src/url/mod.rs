//! URL handling module for biz-scraper
//!
//! This module provides scheme inference for raw user input and host-based
//! helpers used when a page gives no better business name.

mod domain;
mod normalize;

// Re-export main functions
pub use domain::{extract_domain, name_from_host};
pub use normalize::{has_scheme, normalize_url, split_url_list};
