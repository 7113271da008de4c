//! Configuration module for Listing Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! The configuration is built once at startup and passed by reference into the
//! fetcher, the crawl loop and the cleaner.
//!
//! # Example
//!
//! ```no_run
//! use listing_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Requests time out after {}s", config.fetcher.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CleanerConfig, Config, CrawlerConfig, FetcherConfig, SiteConfig, DEFAULT_BASE_ORIGIN,
    DEFAULT_CITY, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
