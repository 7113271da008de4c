//! Listing Harvest: a real-estate listing crawler and dataset cleaner
//!
//! This crate walks the paginated search results of a property portal,
//! extracts one record per listing card, and normalizes the raw records into
//! a typed, analysis-ready CSV dataset.

pub mod cleaner;
pub mod config;
pub mod crawler;
pub mod output;

use thiserror::Error;

/// Main error type for Listing Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The remote site refused access (HTTP 403)
    #[error("Access blocked (HTTP 403) for {url}")]
    Blocked { url: String },

    /// Any other non-success status, connection failure or timeout
    #[error("Transport error for {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// The raw dataset could not be read as the expected tabular data
    #[error("Data format error: {0}")]
    DataFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarvestError {
    /// Returns true when the upstream site explicitly refused the request,
    /// so callers can switch to a fallback instead of failing hard.
    pub fn is_blocked(&self) -> bool {
        matches!(self, HarvestError::Blocked { .. })
    }
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

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Listing Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use cleaner::{clean_data, clean_records, CleanedDataset, CleanedPropertyRecord};
pub use config::Config;
pub use crawler::{run_crawl, Coordinator, Fetcher, RawPropertyRecord};
pub use output::{CleanSummary, CrawlSummary};
